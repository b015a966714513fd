use crate::markup::ParsedDocument;
use crate::theme::Theme;

use super::viewport::ViewportState;

/// Snapshot handed to the renderer each frame
#[derive(Debug, Clone)]
pub struct RenderModel<'a> {
    pub document: ParsedDocument,
    pub viewport: ViewportState,
    /// Cursor offset into the raw document
    pub cursor: usize,
    pub cursor_line: usize,
    /// Cursor column on the tab-expanded raw line
    pub cursor_visual_col: usize,
    pub theme: &'a Theme,
    /// Compact preview hides the line-number gutter
    pub preview: bool,
}

impl RenderModel<'_> {
    pub fn line_count(&self) -> usize {
        self.document.len()
    }

    /// Whether the cursor line is inside the viewport
    pub fn cursor_visible(&self) -> bool {
        self.viewport.is_line_visible(self.cursor_line)
    }
}
