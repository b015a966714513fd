//! Edit history (undo/redo) as whole-document snapshots.

use ropey::Rope;

use super::buffer::TextBuffer;

/// Document and cursor at a point in time.
///
/// Cloning a `Rope` shares its nodes, so a snapshot costs far less than a
/// copy of the text.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub document: Rope,
    pub cursor: usize,
}

impl HistoryEntry {
    pub fn new(document: Rope, cursor: usize) -> Self {
        Self { document, cursor }
    }

    /// Capture the current state of a buffer
    pub fn capture(buffer: &TextBuffer) -> Self {
        Self::new(buffer.rope().clone(), buffer.cursor())
    }

    /// Document text of this snapshot
    pub fn text(&self) -> String {
        self.document.to_string()
    }

    /// Turn the snapshot back into a live buffer
    pub fn into_buffer(self) -> TextBuffer {
        TextBuffer::from_parts(self.document, self.cursor)
    }
}

impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor && self.document == other.document
    }
}

impl Eq for HistoryEntry {}

/// Undo and redo stacks. Depth is unbounded.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state before a fresh edit (clears redo stack)
    pub fn snapshot(&mut self, document: Rope, cursor: usize) {
        self.redo_stack.clear();
        self.undo_stack.push(HistoryEntry::new(document, cursor));
    }

    /// Pop the newest undo entry, parking `current` on the redo stack.
    ///
    /// Returns `None` and leaves both stacks alone when there is nothing to
    /// undo.
    pub fn undo(&mut self, current: HistoryEntry) -> Option<HistoryEntry> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(entry)
    }

    /// Pop the newest redo entry, parking `current` on the undo stack.
    pub fn redo(&mut self, current: HistoryEntry) -> Option<HistoryEntry> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(entry)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
