//! Tab expansion and visual column helpers
//!
//! Offsets into the document always count raw characters. The renderer and
//! vertical navigation work in visual columns, where every `\t` occupies
//! [`TABULATOR_WIDTH`] columns.

/// Columns occupied by a single tab character
pub const TABULATOR_WIDTH: usize = 4;

/// Visual width of a single character
#[inline]
pub fn char_width(ch: char) -> usize {
    if ch == '\t' {
        TABULATOR_WIDTH
    } else {
        1
    }
}

/// Expand every tab to [`TABULATOR_WIDTH`] spaces for display
pub fn expand_tabs(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\t' {
            result.push_str(&" ".repeat(TABULATOR_WIDTH));
        } else {
            result.push(ch);
        }
    }
    result
}

/// Convert character column to visual column (accounting for tab expansion)
pub fn char_col_to_visual_col(text: &str, char_col: usize) -> usize {
    text.chars().take(char_col).map(char_width).sum()
}

/// Convert a visual column (screen position) to character column.
///
/// If the visual column falls inside a tab's expanded space, returns the
/// tab's own column. Past the end of the text, returns the text length.
pub fn visual_col_to_char_col(text: &str, visual_col: usize) -> usize {
    let mut current_visual = 0;
    let mut char_col = 0;

    for ch in text.chars() {
        let next_visual = current_visual + char_width(ch);
        if next_visual > visual_col {
            return char_col;
        }
        current_visual = next_visual;
        char_col += 1;
    }

    char_col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tabs_is_fixed_width() {
        assert_eq!(expand_tabs("\tx"), "    x");
        assert_eq!(expand_tabs("ab\tc"), "ab    c");
        assert_eq!(expand_tabs("no tabs"), "no tabs");
    }

    #[test]
    fn test_char_col_to_visual_col() {
        assert_eq!(char_col_to_visual_col("\tabc", 0), 0);
        assert_eq!(char_col_to_visual_col("\tabc", 1), 4);
        assert_eq!(char_col_to_visual_col("\tabc", 3), 6);
        assert_eq!(char_col_to_visual_col("ab", 10), 2);
    }

    #[test]
    fn test_visual_col_to_char_col() {
        assert_eq!(visual_col_to_char_col("\tabc", 0), 0);
        assert_eq!(visual_col_to_char_col("\tabc", 2), 0);
        assert_eq!(visual_col_to_char_col("\tabc", 4), 1);
        assert_eq!(visual_col_to_char_col("\tabc", 5), 2);
        assert_eq!(visual_col_to_char_col("\tabc", 99), 4);
    }
}
