//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

use aurum::clipboard::MemoryClipboard;
use aurum::messages::EditCommand;
use aurum::model::{AutoSave, EditSession, SessionError, ViewportState};
use aurum::persistence::Persistence;
use aurum::theme::{Color, Theme, ThemeError, ThemeProvider};
use aurum::Cmd;

/// Every text handed to `save`, shared with the test body
#[derive(Debug, Clone, Default)]
pub struct RecordingPersistence {
    saves: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl RecordingPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// A target whose every save fails with an I/O error
    pub fn failing() -> Self {
        Self {
            saves: Rc::default(),
            fail: true,
        }
    }

    pub fn saves(&self) -> Vec<String> {
        self.saves.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.borrow().len()
    }
}

impl Persistence for RecordingPersistence {
    fn save(&mut self, plain_text: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.saves.borrow_mut().push(plain_text.to_string());
        Ok(())
    }
}

/// Themes keyed by id, nothing else
#[derive(Debug, Clone, Default)]
pub struct FixedThemes {
    themes: HashMap<String, Theme>,
}

impl FixedThemes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, theme: Theme) -> Self {
        self.themes.insert(id.to_string(), theme);
        self
    }
}

impl ThemeProvider for FixedThemes {
    fn load_theme(&self, id: &str) -> Result<Theme, ThemeError> {
        self.themes
            .get(id)
            .cloned()
            .ok_or_else(|| ThemeError::NotFound(id.to_string()))
    }
}

/// A single-color theme, handy for telling themes apart
pub fn solid_theme(name: &str, rgb: u8) -> Theme {
    let color = Color::rgb(rgb, rgb, rgb);
    Theme {
        name: name.to_string(),
        text_color: color,
        background_color_1: color,
        background_color_2: color,
        cursor_color: color,
        outline_color: color,
    }
}

/// Create a test session with given text and cursor offset.
///
/// Autosave is disabled and the viewport is 10 lines by 20 columns.
pub fn test_session(text: &str, cursor: usize) -> (EditSession, RecordingPersistence) {
    let persistence = RecordingPersistence::new();
    let mut session = EditSession::new(text, persistence.clone())
        .with_clipboard(MemoryClipboard::new())
        .with_theme_provider(FixedThemes::new())
        .with_autosave(AutoSave::disabled())
        .with_viewport(ViewportState::new(10, 20));
    place_cursor(&mut session, cursor);
    (session, persistence)
}

/// Move the cursor to `offset` using only right/left commands from the end
pub fn place_cursor(session: &mut EditSession, offset: usize) {
    use aurum::messages::Direction;
    while session.cursor() > offset {
        session
            .apply(EditCommand::MoveCursor(Direction::Left))
            .expect("navigation cannot fail");
    }
    while session.cursor() < offset {
        session
            .apply(EditCommand::MoveCursor(Direction::Right))
            .expect("navigation cannot fail");
    }
}

/// Apply a command that must not fail
pub fn apply(session: &mut EditSession, command: EditCommand) -> Option<Cmd> {
    session
        .apply(command)
        .unwrap_or_else(|e: SessionError| panic!("command failed: {}", e))
}

/// Type a string one character at a time
pub fn type_text(session: &mut EditSession, text: &str) {
    for ch in text.chars() {
        apply(session, EditCommand::InsertText(ch.to_string()));
    }
}
