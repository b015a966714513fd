//! Key translation: raw key events to edit commands
//!
//! Two modifier flags are tracked. Each is set when its key goes down and
//! cleared when it comes up. A release that never arrives (for example when
//! the window loses focus while shift is held) leaves the flag stuck until
//! the next press/release pair; the translator does not try to resync.

use crate::messages::{Direction, EditCommand};

use super::types::{KeyEvent, KeyOutput, RawKey};

/// Replacements for shifted digit-row and punctuation keys
pub const SHIFT_REPLACEMENTS: &[(char, char)] = &[
    ('1', '!'),
    ('2', '@'),
    ('3', '#'),
    ('4', '$'),
    ('5', '%'),
    ('6', '^'),
    ('7', '&'),
    ('8', '*'),
    ('9', '('),
    ('0', ')'),
    ('-', '_'),
    ('=', '+'),
    ('`', '~'),
    ('\'', '"'),
    (',', '<'),
    ('.', '>'),
    ('/', '?'),
    (';', ':'),
];

const SHIFT_KEYS: &[&str] = &["left shift", "right shift"];

/// Keys acting as the command modifier (Cmd on macOS, Ctrl elsewhere)
fn is_command_key(name: &str) -> bool {
    match name {
        "left ctrl" | "right ctrl" => true,
        "left meta" | "right meta" => cfg!(target_os = "macos"),
        _ => false,
    }
}

/// Map a navigation key name to a cursor direction
fn navigation_direction(name: &str) -> Option<Direction> {
    match name {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "page up" => Some(Direction::PageUp),
        "page down" => Some(Direction::PageDown),
        _ => None,
    }
}

/// Shifted form of a character: table replacement, else uppercase
pub fn shifted(ch: char) -> char {
    SHIFT_REPLACEMENTS
        .iter()
        .find(|(plain, _)| *plain == ch)
        .map(|(_, replacement)| *replacement)
        .unwrap_or_else(|| ch.to_uppercase().next().unwrap_or(ch))
}

/// Command bound to `ch` while the command modifier is held
pub fn command_for(ch: char) -> Option<EditCommand> {
    match ch {
        's' => Some(EditCommand::Save),
        'z' => Some(EditCommand::Undo),
        'y' => Some(EditCommand::Redo),
        'v' => Some(EditCommand::PasteClipboard),
        'w' => Some(EditCommand::TogglePreview),
        '1'..='9' => ch.to_digit(10).map(|d| EditCommand::SwitchTheme(d as u8)),
        _ => None,
    }
}

/// Stateless first stage: what a key press produces before modifiers.
///
/// Releases produce no output.
pub fn key_output(event: &KeyEvent) -> KeyOutput {
    if !event.is_pressed() {
        return KeyOutput::NoOutput;
    }
    match &event.key {
        RawKey::Tab => KeyOutput::Char('\t'),
        RawKey::Backspace => KeyOutput::Backspace,
        RawKey::Enter => KeyOutput::Char('\n'),
        RawKey::Space => KeyOutput::Char(' '),
        RawKey::Named(name) => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (None, _) => KeyOutput::NoOutput,
                (Some(ch), None) => KeyOutput::Char(ch),
                _ => KeyOutput::Named(name.clone()),
            }
        }
    }
}

/// Modifier state machine turning key events into edit commands
#[derive(Debug, Clone, Default)]
pub struct KeyTranslator {
    shift_active: bool,
    modifier_active: bool,
}

impl KeyTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift_active(&self) -> bool {
        self.shift_active
    }

    pub fn modifier_active(&self) -> bool {
        self.modifier_active
    }

    /// Translate one key event. Returns `None` for modifier transitions,
    /// releases, and keys with no binding.
    pub fn translate(&mut self, event: &KeyEvent) -> Option<EditCommand> {
        if !event.is_pressed() {
            self.release(&event.key);
            return None;
        }

        match key_output(event) {
            KeyOutput::Backspace => Some(EditCommand::Backspace),
            KeyOutput::NoOutput => None,
            KeyOutput::Named(name) => self.press_named(&name),
            KeyOutput::Char('\t') => Some(EditCommand::Tab),
            KeyOutput::Char('\n') => Some(EditCommand::Newline),
            KeyOutput::Char(' ') => Some(EditCommand::InsertText(" ".to_string())),
            KeyOutput::Char(ch) => self.press_char(ch),
        }
    }

    fn release(&mut self, key: &RawKey) {
        if let RawKey::Named(name) = key {
            if SHIFT_KEYS.contains(&name.as_str()) {
                self.shift_active = false;
            } else if is_command_key(name) {
                self.modifier_active = false;
            }
        }
    }

    fn press_named(&mut self, name: &str) -> Option<EditCommand> {
        if SHIFT_KEYS.contains(&name) {
            self.shift_active = true;
            return None;
        }
        if is_command_key(name) {
            self.modifier_active = true;
            return None;
        }
        let direction = navigation_direction(name);
        if direction.is_none() {
            tracing::trace!(key = name, "unbound key");
        }
        direction.map(EditCommand::MoveCursor)
    }

    fn press_char(&self, ch: char) -> Option<EditCommand> {
        if self.modifier_active {
            return command_for(ch);
        }
        let ch = if self.shift_active { shifted(ch) } else { ch };
        Some(EditCommand::InsertText(ch.to_string()))
    }
}
