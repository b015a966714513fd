//! Clipboard access
//!
//! The system clipboard is opened per call, the same way each paste handler
//! creates its own `arboard::Clipboard`. Failures are logged and surface as
//! "no text".

/// Synchronous clipboard contract
pub trait ClipboardProvider {
    /// Current clipboard text, or `None` when empty or unavailable
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard text. Returns whether it succeeded.
    fn set_text(&mut self, text: &str) -> bool;
}

/// The operating system clipboard via `arboard`
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                return None;
            }
        };
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!("No clipboard text: {}", e);
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) -> bool {
        match arboard::Clipboard::new().and_then(|mut c| c.set_text(text.to_owned())) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to set clipboard text: {}", e);
                false
            }
        }
    }
}

/// In-process clipboard for headless sessions and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) -> bool {
        self.text = Some(text.to_string());
        true
    }
}
