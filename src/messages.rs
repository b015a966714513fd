//! Message types flowing from key translation into the edit session
//!
//! Every user action becomes exactly one [`EditCommand`].

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

/// A single edit or editor action, produced by the key translator and
/// consumed by [`EditSession::apply`](crate::model::EditSession::apply)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert text at the cursor
    InsertText(String),
    /// Delete the character before the cursor
    Backspace,
    MoveCursor(Direction),
    Newline,
    Tab,
    Undo,
    Redo,
    /// Write the markup-stripped document
    Save,
    /// Load the theme bound to a digit key (1-9)
    SwitchTheme(u8),
    /// Insert the system clipboard contents at the cursor
    PasteClipboard,
    /// Toggle the compact preview (render-only)
    TogglePreview,
}

impl EditCommand {
    /// Commands that change document content and are recorded in history
    pub fn is_fresh_edit(&self) -> bool {
        matches!(
            self,
            EditCommand::InsertText(_)
                | EditCommand::Backspace
                | EditCommand::Newline
                | EditCommand::Tab
                | EditCommand::PasteClipboard
        )
    }
}
