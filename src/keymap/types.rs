//! Core types for key translation: raw key events and first-stage output

/// Whether a key went down or came up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A key as reported by the platform layer.
///
/// Whitespace and control keys have dedicated variants; everything else
/// carries its platform key name: lowercase, unshifted, with multi-word
/// names separated by a space (`"a"`, `"1"`, `"left shift"`, `"page up"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawKey {
    Tab,
    Backspace,
    Enter,
    Space,
    Named(String),
}

impl RawKey {
    pub fn named(name: impl Into<String>) -> Self {
        RawKey::Named(name.into())
    }
}

/// A key transition delivered to the translator
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: RawKey,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn new(key: RawKey, state: KeyState) -> Self {
        Self { key, state }
    }

    pub fn pressed(key: RawKey) -> Self {
        Self::new(key, KeyState::Pressed)
    }

    pub fn released(key: RawKey) -> Self {
        Self::new(key, KeyState::Released)
    }

    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }
}

/// What a key press produces before modifiers are applied
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutput {
    /// A single character (including `\t`, `\n` and space)
    Char(char),
    Backspace,
    /// A named non-character key such as `"left shift"` or `"up"`
    Named(String),
    NoOutput,
}
