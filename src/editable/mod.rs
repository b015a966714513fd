//! Text editing core: the document buffer and its history.
//!
//! - [`TextBuffer`]: the document (a `ropey::Rope`) plus the cursor offset
//! - [`HistoryStack`]: undo/redo stacks of [`HistoryEntry`] snapshots
//!
//! # Example
//!
//! ```
//! use aurum::editable::{HistoryEntry, HistoryStack, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_text("ab");
//! let mut history = HistoryStack::new();
//!
//! history.snapshot(buffer.rope().clone(), buffer.cursor());
//! buffer.insert_at(buffer.cursor(), "c");
//! assert_eq!(buffer.text(), "abc");
//!
//! let previous = history.undo(HistoryEntry::capture(&buffer)).unwrap();
//! assert_eq!(previous.text(), "ab");
//! assert_eq!(previous.cursor, 2);
//! ```

mod buffer;
mod history;

pub use buffer::TextBuffer;
pub use history::{HistoryEntry, HistoryStack};
