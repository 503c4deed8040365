//! Note representation.

use crate::error::{Error, Result};
use crate::parser::parse_outline;
use crate::search::{Document, OutlineEntry};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

/// A markdown note backed by a file.
///
/// Name and path come from the file location. The body is read at most
/// once, on first use; a body that cannot be read counts as absent.
#[derive(Debug, Clone)]
pub struct Note {
    /// Location of the note file.
    pub path: PathBuf,

    content: OnceLock<Option<String>>,
}

impl Note {
    /// Create a new note from path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: OnceLock::from(Some(content.into())),
        }
    }

    /// Open a note on disk without reading its body.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NoteNotFound(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            content: OnceLock::new(),
        })
    }

    /// Load a note from disk, reading its body now.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NoteNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(path, content))
    }

    /// Get the note name (filename without .md extension).
    pub fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    /// Get the parent folder path.
    pub fn folder(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    /// Raw body of the note, or `None` if it could not be read.
    pub fn content(&self) -> Option<&str> {
        self.content
            .get_or_init(|| read_body(&self.path))
            .as_deref()
    }
}

fn read_body(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read note body");
            None
        }
    }
}

impl Document for Note {
    fn name(&self) -> &str {
        Note::name(self)
    }

    fn path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    fn outline(&self) -> Option<Vec<OutlineEntry>> {
        self.content().map(parse_outline)
    }

    fn content(&self) -> Option<&str> {
        Note::content(self)
    }
}
