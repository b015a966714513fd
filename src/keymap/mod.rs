//! Keyboard translation
//!
//! # Architecture
//!
//! ```text
//! winit::KeyEvent → KeyEvent → KeyTranslator::translate() → EditCommand
//! ```
//!
//! The first stage ([`key_output`]) turns a press into a character, a
//! backspace, or a named key. The [`KeyTranslator`] then applies the shift
//! and command modifiers it tracks across events.

mod translator;
mod types;
mod winit_adapter;

pub use translator::{command_for, key_output, shifted, KeyTranslator, SHIFT_REPLACEMENTS};
pub use types::{KeyEvent, KeyOutput, KeyState, RawKey};
pub use winit_adapter::{key_event_from_winit, raw_key_from_winit};
