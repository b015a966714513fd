//! Writing the document to disk
//!
//! The edit session only ever hands over markup-stripped text; where it ends
//! up is decided by the [`Persistence`] implementation.

use std::io;
use std::path::{Path, PathBuf};

/// Destination for saved document text
pub trait Persistence {
    /// Replace the stored document with `plain_text`
    fn save(&mut self, plain_text: &str) -> io::Result<()>;
}

/// Saves by overwriting a file on every call
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for FilePersistence {
    fn save(&mut self, plain_text: &str) -> io::Result<()> {
        std::fs::write(&self.path, plain_text)?;
        tracing::info!(
            path = %self.path.display(),
            bytes = plain_text.len(),
            "Saved document"
        );
        Ok(())
    }
}

/// Open `path` for editing, creating an empty file when it does not exist.
///
/// Existing content is never truncated.
pub fn open_or_create(path: &Path) -> io::Result<String> {
    if !path.exists() {
        tracing::info!("Creating file {}", path.display());
        std::fs::write(path, "")?;
        return Ok(String::new());
    }
    tracing::info!("Opening file {}", path.display());
    std::fs::read_to_string(path)
}
