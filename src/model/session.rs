//! The edit session: the one owner of all editing state

use std::fmt;
use std::time::Duration;

use crate::clipboard::{ClipboardProvider, MemoryClipboard};
use crate::commands::Cmd;
use crate::editable::{HistoryStack, TextBuffer};
use crate::markup::{parse_document, strip_markup};
use crate::messages::EditCommand;
use crate::persistence::Persistence;
use crate::theme::{Theme, ThemeLibrary, ThemeProvider};

use super::autosave::AutoSave;
use super::render::RenderModel;
use super::viewport::ViewportState;

/// Fatal session failure. The runtime ends the session and rolls the file
/// back when it sees one of these.
#[derive(Debug)]
pub enum SessionError {
    /// Writing the document failed
    Persistence(std::io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Persistence(e) => write!(f, "Failed to save document: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Persistence(e) => Some(e),
        }
    }
}

/// Document, cursor, history, scroll state, autosave clock, and the active
/// theme, plus the collaborators used for saving, pasting, and theme
/// loading.
pub struct EditSession {
    pub(crate) buffer: TextBuffer,
    pub(crate) history: HistoryStack,
    pub(crate) viewport: ViewportState,
    pub(crate) autosave: AutoSave,
    pub(crate) theme: Theme,
    pub(crate) preview: bool,
    pub(crate) persistence: Box<dyn Persistence>,
    pub(crate) clipboard: Box<dyn ClipboardProvider>,
    pub(crate) themes: Box<dyn ThemeProvider>,
}

impl EditSession {
    /// Start a session on `text` with the cursor at the end.
    ///
    /// The autosave interval is derived from `text` here and never
    /// recomputed. Clipboard and themes default to an in-memory clipboard and
    /// the built-in theme set.
    pub fn new(text: &str, persistence: impl Persistence + 'static) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            history: HistoryStack::new(),
            viewport: ViewportState::default(),
            autosave: AutoSave::for_document(text),
            theme: Theme::default(),
            preview: false,
            persistence: Box::new(persistence),
            clipboard: Box::new(MemoryClipboard::new()),
            themes: Box::new(ThemeLibrary::builtin_only()),
        }
    }

    pub fn with_clipboard(mut self, clipboard: impl ClipboardProvider + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn with_theme_provider(mut self, themes: impl ThemeProvider + 'static) -> Self {
        self.themes = Box::new(themes);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_autosave(mut self, autosave: AutoSave) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportState) -> Self {
        self.viewport = viewport;
        self
    }

    /// Apply one edit command. See [`crate::update::update`].
    pub fn apply(&mut self, command: EditCommand) -> Result<Option<Cmd>, SessionError> {
        crate::update::update(self, command)
    }

    /// Advance the autosave clock by `elapsed`, saving when due.
    ///
    /// Returns whether a save happened.
    pub fn tick(&mut self, elapsed: Duration) -> Result<bool, SessionError> {
        if !self.autosave.tick(elapsed) {
            return Ok(false);
        }
        tracing::debug!(interval = ?self.autosave.interval(), "Autosave due");
        self.save()?;
        Ok(true)
    }

    /// Strip markup and hand the plain text to the persistence collaborator.
    /// Resets the autosave clock.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let plain_text = strip_markup(&self.buffer.text());
        self.persistence
            .save(&plain_text)
            .map_err(SessionError::Persistence)?;
        self.autosave.reset();
        Ok(())
    }

    /// Report how many lines and columns fit in the text area
    pub fn set_viewport_size(&mut self, lines_per_page: usize, visible_columns: usize) {
        self.viewport.resize(lines_per_page, visible_columns);
    }

    /// Scroll so the cursor is on screen. Run once per draw cycle.
    pub fn reconcile_viewport(&mut self) {
        let cursor = self.buffer.cursor();
        let line = self.buffer.line_of(cursor);
        let col = self.buffer.visual_column(cursor);
        self.viewport.reconcile(line, col);
    }

    /// Everything the renderer needs for one frame, parsed fresh
    pub fn render_model(&self) -> RenderModel<'_> {
        let cursor = self.buffer.cursor();
        RenderModel {
            document: parse_document(&self.buffer.text()),
            viewport: self.viewport,
            cursor,
            cursor_line: self.buffer.line_of(cursor),
            cursor_visual_col: self.buffer.visual_column(cursor),
            theme: &self.theme,
            preview: self.preview,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Full document text, markup included
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn autosave(&self) -> &AutoSave {
        &self.autosave
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }
}

impl fmt::Debug for EditSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditSession")
            .field("buffer", &self.buffer)
            .field("history", &self.history)
            .field("viewport", &self.viewport)
            .field("autosave", &self.autosave)
            .field("theme", &self.theme.name)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}
