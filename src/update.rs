//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

use crate::commands::Cmd;
use crate::editable::HistoryEntry;
use crate::messages::{Direction, EditCommand};
use crate::model::{EditSession, SessionError};

/// Main update function - dispatches one command against the session.
///
/// Fresh edits snapshot history before mutating, and only when they change
/// the document. Undo/Redo restore a snapshot without recording one. An
/// error means the session cannot continue.
pub fn update(
    session: &mut EditSession,
    command: EditCommand,
) -> Result<Option<Cmd>, SessionError> {
    session.buffer.clamp_cursor();
    tracing::debug!(?command, cursor = session.buffer.cursor(), "apply");

    let result = match command {
        EditCommand::InsertText(text) => insert_text(session, &text),
        EditCommand::Newline => insert_text(session, "\n"),
        EditCommand::Tab => insert_text(session, "\t"),
        EditCommand::Backspace => backspace(session),
        EditCommand::PasteClipboard => paste_clipboard(session),
        EditCommand::MoveCursor(direction) => move_cursor(session, direction),
        EditCommand::Undo => undo(session),
        EditCommand::Redo => redo(session),
        EditCommand::Save => {
            session.save()?;
            None
        }
        EditCommand::SwitchTheme(index) => switch_theme(session, index),
        EditCommand::TogglePreview => {
            session.preview = !session.preview;
            tracing::debug!(preview = session.preview, "Toggled preview");
            Some(Cmd::Relayout)
        }
    };

    Ok(result)
}

fn insert_text(session: &mut EditSession, text: &str) -> Option<Cmd> {
    if text.is_empty() {
        return None;
    }
    let pos = session.buffer.cursor();
    session.history.snapshot(session.buffer.rope().clone(), pos);
    session.buffer.insert_at(pos, text);
    Some(Cmd::Redraw)
}

fn backspace(session: &mut EditSession) -> Option<Cmd> {
    session.viewport.nudge_left();
    let pos = session.buffer.cursor();
    if pos == 0 {
        return Some(Cmd::Redraw);
    }
    session.history.snapshot(session.buffer.rope().clone(), pos);
    session.buffer.delete_backward(pos);
    Some(Cmd::Redraw)
}

fn paste_clipboard(session: &mut EditSession) -> Option<Cmd> {
    match session.clipboard.get_text() {
        Some(text) if !text.is_empty() => insert_text(session, &text),
        _ => {
            tracing::debug!("Nothing to paste");
            None
        }
    }
}

fn move_cursor(session: &mut EditSession, direction: Direction) -> Option<Cmd> {
    let buffer = &session.buffer;
    let pos = buffer.cursor();
    let page = session.viewport.lines_per_page.max(1);

    let target = match direction {
        Direction::Left => {
            session.viewport.nudge_left();
            buffer.move_horizontal(pos, -1)
        }
        Direction::Right => buffer.move_horizontal(pos, 1),
        Direction::Up => buffer.move_up(pos),
        Direction::Down => buffer.move_down(pos),
        Direction::PageUp => (0..page).fold(pos, |p, _| buffer.move_up(p)),
        Direction::PageDown => (0..page).fold(pos, |p, _| buffer.move_down(p)),
    };

    session.buffer.set_cursor(target);
    Some(Cmd::Redraw)
}

fn undo(session: &mut EditSession) -> Option<Cmd> {
    let current = HistoryEntry::capture(&session.buffer);
    let entry = session.history.undo(current)?;
    session.buffer = entry.into_buffer();
    Some(Cmd::Redraw)
}

fn redo(session: &mut EditSession) -> Option<Cmd> {
    let current = HistoryEntry::capture(&session.buffer);
    let entry = session.history.redo(current)?;
    session.buffer = entry.into_buffer();
    Some(Cmd::Redraw)
}

fn switch_theme(session: &mut EditSession, index: u8) -> Option<Cmd> {
    let id = index.to_string();
    match session.themes.load_theme(&id) {
        Ok(theme) => {
            tracing::info!("Switched to theme {} ({})", id, theme.name);
            session.theme = theme;
            Some(Cmd::Redraw)
        }
        Err(e) => {
            tracing::warn!("Keeping current theme: {}", e);
            None
        }
    }
}
