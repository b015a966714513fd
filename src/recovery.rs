//! Crash rollback
//!
//! Before the event loop starts, the markup-stripped initial document is
//! captured. If the session dies (a fatal error or a panic), the file is
//! overwritten with that snapshot on a best-effort basis and the process
//! exits with [`CRASH_EXIT_CODE`].

use std::io;
use std::path::{Path, PathBuf};

use crate::markup::strip_markup;

/// Exit status for "editor crashed, rollback attempted"
pub const CRASH_EXIT_CODE: i32 = 3;

/// The document as it was when the session started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackSnapshot {
    path: PathBuf,
    plain_text: String,
}

impl RollbackSnapshot {
    pub fn capture(path: impl Into<PathBuf>, document: &str) -> Self {
        Self {
            path: path.into(),
            plain_text: strip_markup(document),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// Overwrite the target file with the captured text
    pub fn restore(&self) -> io::Result<()> {
        std::fs::write(&self.path, &self.plain_text)
    }

    /// Restore, logging the outcome instead of returning it
    pub fn restore_best_effort(&self) {
        match self.restore() {
            Ok(()) => tracing::warn!("Rolled back {}", self.path.display()),
            Err(e) => tracing::error!("Rollback of {} failed: {}", self.path.display(), e),
        }
    }
}

/// Install a panic hook that rolls the file back and exits.
///
/// Release builds abort on panic, so unwinding cannot be caught; the hook
/// runs before the abort.
pub fn install_panic_hook(snapshot: RollbackSnapshot) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_hook(info);
        tracing::error!("Editor panicked: {}", info);
        snapshot.restore_best_effort();
        std::process::exit(CRASH_EXIT_CODE);
    }));
}
