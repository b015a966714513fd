//! Scroll offsets over the document

use std::ops::Range;

/// Viewport state - what portion of the document is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    /// First visible line (0-indexed)
    pub vertical_offset: usize,
    /// First visible column, tab-expanded
    pub horizontal_offset: usize,
    /// Number of lines that fit in the viewport
    pub lines_per_page: usize,
    /// Number of columns that fit in the viewport
    pub visible_columns: usize,
}

impl ViewportState {
    /// Create a new viewport with the given dimensions
    pub fn new(lines_per_page: usize, visible_columns: usize) -> Self {
        Self {
            vertical_offset: 0,
            horizontal_offset: 0,
            lines_per_page,
            visible_columns,
        }
    }

    /// Update the page dimensions after a resize. Offsets are kept; the next
    /// reconcile brings the cursor back into view.
    pub fn resize(&mut self, lines_per_page: usize, visible_columns: usize) {
        self.lines_per_page = lines_per_page;
        self.visible_columns = visible_columns;
    }

    /// Bring the cursor into view.
    ///
    /// Vertically the offset moves the minimum amount so `cursor_line` lies
    /// in `[vertical_offset, vertical_offset + lines_per_page)`. Horizontally
    /// the offset grows by a single column when the cursor sits at or past
    /// the right edge; it never shrinks here. A zero-width text area has no
    /// right edge and leaves the offset alone.
    pub fn reconcile(&mut self, cursor_line: usize, cursor_visual_col: usize) {
        if self.lines_per_page == 0 {
            self.vertical_offset = cursor_line;
        } else if cursor_line < self.vertical_offset {
            self.vertical_offset = cursor_line;
        } else if cursor_line >= self.vertical_offset + self.lines_per_page {
            self.vertical_offset = cursor_line + 1 - self.lines_per_page;
        }

        if self.visible_columns > 0
            && cursor_visual_col.saturating_sub(self.horizontal_offset) >= self.visible_columns
        {
            self.horizontal_offset += 1;
        }
    }

    /// Backward navigation scrolls one column left, if scrolled at all
    pub fn nudge_left(&mut self) {
        self.horizontal_offset = self.horizontal_offset.saturating_sub(1);
    }

    /// Line indices currently on screen
    pub fn visible_lines(&self) -> Range<usize> {
        self.vertical_offset..self.vertical_offset + self.lines_per_page
    }

    pub fn is_line_visible(&self, line: usize) -> bool {
        self.visible_lines().contains(&line)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(25, 80)
    }
}
