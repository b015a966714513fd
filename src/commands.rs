//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw
    Redraw,
    /// Text area geometry changed (gutter shown or hidden); recompute the
    /// viewport size, then redraw
    Relayout,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Relayout => true,
        }
    }

    pub fn needs_relayout(&self) -> bool {
        matches!(self, Cmd::Relayout)
    }
}
