//! Aurum - a minimal text editor with inline style markup
//!
//! This crate provides the editing core: the document buffer and history,
//! the markup codec, key translation, and the edit session that ties them
//! together following the Elm Architecture pattern. The window runtime lives
//! in the binary.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod keymap;
pub mod markup;
pub mod messages;
pub mod model;
pub mod persistence;
pub mod recovery;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::EditCommand;
pub use model::EditSession;
pub use theme::Theme;
