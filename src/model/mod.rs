//! Session model - the complete state of the editor
//!
//! A single [`EditSession`] owns the document and everything derived from
//! it. Commands are applied through [`EditSession::apply`], which dispatches
//! to [`crate::update`].

mod autosave;
mod render;
mod session;
mod viewport;

pub use autosave::{AutoSave, CHARS_PER_SECOND};
pub use render::RenderModel;
pub use session::{EditSession, SessionError};
pub use viewport::ViewportState;

/// Width of the line number gutter in characters (e.g. " 123 ")
pub const LINE_NUMBER_GUTTER_CHARS: usize = 5;
/// Padding after line numbers, before the gutter border (pixels)
pub const GUTTER_PADDING_PX: f32 = 4.0;
/// Padding after the gutter border, before text content (pixels)
pub const TEXT_AREA_PADDING_PX: f32 = 8.0;

/// Calculate the x-coordinate where text content begins
#[inline]
pub fn text_start_x(char_width: f32, preview: bool) -> f32 {
    if preview {
        return TEXT_AREA_PADDING_PX;
    }
    gutter_border_x(char_width) + 1.0 + TEXT_AREA_PADDING_PX
}

/// Calculate the x-coordinate of the gutter border
#[inline]
pub fn gutter_border_x(char_width: f32) -> f32 {
    char_width * LINE_NUMBER_GUTTER_CHARS as f32 + GUTTER_PADDING_PX
}
