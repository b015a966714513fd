//! The document buffer and its cursor.
//!
//! Offsets are character (code point) indices into the document. The buffer
//! is backed by a `ropey::Rope`, which addresses characters natively and
//! makes history snapshots cheap to clone.

use ropey::Rope;

use crate::util::{char_col_to_visual_col, visual_col_to_char_col};

/// Document text plus a single insertion point.
///
/// Invariant: `cursor <= len_chars()` after every public operation.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from text with the cursor at the end, matching where
    /// the editor places it when a file is opened.
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let cursor = rope.len_chars();
        Self { rope, cursor }
    }

    /// Restore a buffer from a history snapshot
    pub fn from_parts(rope: Rope, cursor: usize) -> Self {
        let mut buffer = Self { rope, cursor };
        buffer.clamp_cursor();
        buffer
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Full document text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping into `[0, len]`
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.len_chars());
    }

    /// Clamp the cursor into range; an empty document forces it to 0
    pub fn clamp_cursor(&mut self) {
        if self.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.len_chars());
        }
    }

    /// Insert `text` at `pos`; the cursor lands just after the inserted text.
    pub fn insert_at(&mut self, pos: usize, text: &str) {
        let pos = pos.min(self.len_chars());
        self.rope.insert(pos, text);
        self.cursor = pos + text.chars().count();
    }

    /// Remove the character before `pos`.
    ///
    /// Returns `false` without touching anything when `pos` is 0.
    pub fn delete_backward(&mut self, pos: usize) -> bool {
        let pos = pos.min(self.len_chars());
        if pos == 0 {
            return false;
        }
        self.rope.remove(pos - 1..pos);
        self.cursor = pos - 1;
        true
    }

    /// Offset of the first character of the line containing `pos`
    pub fn line_start(&self, pos: usize) -> usize {
        let line = self.line_of(pos);
        self.rope.line_to_char(line)
    }

    /// Offset of the end of the line containing `pos` (the `\n` position, or
    /// the end of the buffer on the last line)
    pub fn line_end(&self, pos: usize) -> usize {
        let line = self.line_of(pos);
        self.line_start(pos) + self.line_len(line)
    }

    /// Zero-based line index of `pos`
    pub fn line_of(&self, pos: usize) -> usize {
        self.rope.char_to_line(pos.min(self.len_chars()))
    }

    /// Number of lines; a trailing newline starts a new, empty line
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of `line` without its trailing newline
    pub fn line_text(&self, line: usize) -> String {
        if line >= self.rope.len_lines() {
            return String::new();
        }
        let text = self.rope.line(line).to_string();
        match text.strip_suffix('\n') {
            Some(stripped) => stripped.to_string(),
            None => text,
        }
    }

    /// Length of `line` in characters, excluding the newline
    pub fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Raw column of `pos` within its line
    pub fn column(&self, pos: usize) -> usize {
        let pos = pos.min(self.len_chars());
        pos - self.line_start(pos)
    }

    /// Tab-expanded column of `pos` within its line
    pub fn visual_column(&self, pos: usize) -> usize {
        let line = self.line_of(pos);
        char_col_to_visual_col(&self.line_text(line), self.column(pos))
    }

    /// Clamp `pos + delta` into `[0, len]`
    pub fn move_horizontal(&self, pos: usize, delta: isize) -> usize {
        let target = pos as isize + delta;
        target.clamp(0, self.len_chars() as isize) as usize
    }

    /// Offset one line above `pos`, keeping the visual column where the
    /// previous line is long enough. With no previous line, returns 0.
    pub fn move_up(&self, pos: usize) -> usize {
        let line = self.line_of(pos);
        if line == 0 {
            return 0;
        }
        self.offset_at_visual_column(line - 1, self.visual_column(pos))
    }

    /// Offset one line below `pos`, keeping the visual column where the
    /// next line is long enough. With no following line, returns the end of
    /// the document.
    pub fn move_down(&self, pos: usize) -> usize {
        let line = self.line_of(pos);
        if line + 1 >= self.line_count() {
            return self.len_chars();
        }
        self.offset_at_visual_column(line + 1, self.visual_column(pos))
    }

    fn offset_at_visual_column(&self, line: usize, visual_col: usize) -> usize {
        let text = self.line_text(line);
        let char_col = visual_col_to_char_col(&text, visual_col).min(self.line_len(line));
        self.rope.line_to_char(line) + char_col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_at(text: &str, cursor: usize) -> TextBuffer {
        let mut buffer = TextBuffer::from_text(text);
        buffer.set_cursor(cursor);
        buffer
    }

    #[test]
    fn test_from_text_places_cursor_at_end() {
        let buffer = TextBuffer::from_text("héllo");
        assert_eq!(buffer.cursor(), 5);
        assert_eq!(buffer.len_chars(), 5);
    }

    #[test]
    fn test_insert_at_moves_cursor_past_text() {
        let mut buffer = buffer_at("ab", 1);
        buffer.insert_at(1, "XYZ");
        assert_eq!(buffer.text(), "aXYZb");
        assert_eq!(buffer.cursor(), 4);
    }

    #[test]
    fn test_insert_at_accepts_tabs_and_newlines() {
        let mut buffer = TextBuffer::new();
        buffer.insert_at(0, "\ta\nb");
        assert_eq!(buffer.text(), "\ta\nb");
        assert_eq!(buffer.cursor(), 4);
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let mut buffer = buffer_at("abc", 2);
        buffer.insert_at(2, "");
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_delete_backward() {
        let mut buffer = buffer_at("abc", 2);
        assert!(buffer.delete_backward(2));
        assert_eq!(buffer.text(), "ac");
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_delete_backward_at_zero_is_noop() {
        let mut buffer = buffer_at("abc", 0);
        assert!(!buffer.delete_backward(0));
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_delete_backward_multibyte() {
        let mut buffer = buffer_at("añb", 2);
        assert!(buffer.delete_backward(2));
        assert_eq!(buffer.text(), "ab");
    }

    #[test]
    fn test_line_start_and_end() {
        let buffer = TextBuffer::from_text("line1\nline2\nline3");
        assert_eq!(buffer.line_start(8), 6);
        assert_eq!(buffer.line_end(8), 11);
        assert_eq!(buffer.line_start(0), 0);
        assert_eq!(buffer.line_end(0), 5);
        assert_eq!(buffer.line_end(17), 17);
    }

    #[test]
    fn test_line_of_newline_position() {
        let buffer = TextBuffer::from_text("ab\ncd");
        assert_eq!(buffer.line_of(2), 0);
        assert_eq!(buffer.line_of(3), 1);
    }

    #[test]
    fn test_move_horizontal_clamps() {
        let buffer = TextBuffer::from_text("abc");
        assert_eq!(buffer.move_horizontal(0, -1), 0);
        assert_eq!(buffer.move_horizontal(3, 1), 3);
        assert_eq!(buffer.move_horizontal(1, 1), 2);
    }

    #[test]
    fn test_move_up_and_down_keep_column() {
        let buffer = TextBuffer::from_text("line1\nline2\nline3");
        assert_eq!(buffer.move_up(6), 0);
        assert_eq!(buffer.move_down(0), 6);
        assert_eq!(buffer.move_down(8), 14);
        assert_eq!(buffer.move_up(14), 8);
    }

    #[test]
    fn test_move_up_on_first_line_goes_to_start() {
        let buffer = TextBuffer::from_text("hello\nworld");
        assert_eq!(buffer.move_up(3), 0);
    }

    #[test]
    fn test_move_down_on_last_line_goes_to_end() {
        let buffer = TextBuffer::from_text("hello\nworld");
        assert_eq!(buffer.move_down(7), 11);
    }

    #[test]
    fn test_move_up_clamps_to_shorter_line() {
        let buffer = TextBuffer::from_text("ab\nabcdef");
        assert_eq!(buffer.move_up(9), 2);
    }

    #[test]
    fn test_vertical_movement_uses_expanded_tabs() {
        // "\tx" puts 'x' at visual column 4
        let buffer = TextBuffer::from_text("abcdef\n\tx");
        // From 'x' (offset 8, visual col 4) up to 'e' (offset 4)
        assert_eq!(buffer.move_up(9), 5);
        assert_eq!(buffer.move_up(8), 4);
        // From 'e' (visual col 4) down lands after the tab
        assert_eq!(buffer.move_down(4), 8);
        // From 'b' (visual col 1) down lands on the tab itself
        assert_eq!(buffer.move_down(1), 7);
    }

    #[test]
    fn test_visual_column() {
        let buffer = TextBuffer::from_text("a\n\t\tb");
        assert_eq!(buffer.visual_column(4), 8);
        assert_eq!(buffer.column(4), 2);
    }

    #[test]
    fn test_clamp_cursor_on_empty() {
        let mut buffer = TextBuffer::from_parts(Rope::new(), 7);
        assert_eq!(buffer.cursor(), 0);
        buffer.set_cursor(3);
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_only_newline_breaks_lines() {
        let buffer = TextBuffer::from_text("ab\rcd");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line_start(4), 0);
        assert_eq!(buffer.line_end(1), 5);

        let buffer = TextBuffer::from_text("a\x0Cb");
        assert_eq!(buffer.move_down(0), 3);
        assert_eq!(buffer.move_up(3), 0);

        let buffer = TextBuffer::from_text("x\u{2028}y\u{2029}z\u{85}w");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line_of(7), 0);
        assert_eq!(buffer.line_text(0), "x\u{2028}y\u{2029}z\u{85}w");
    }

    #[test]
    fn test_crlf_keeps_carriage_return_in_line() {
        let buffer = TextBuffer::from_text("ab\r\ncd");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line_text(0), "ab\r");
        assert_eq!(buffer.line_start(5), 4);
    }
}
