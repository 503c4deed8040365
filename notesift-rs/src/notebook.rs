//! Notebooks: directory trees of markdown notes.

use crate::error::{Error, Result};
use glob::{Pattern, glob};
use std::path::{Path, PathBuf};
use tracing::warn;

/// A notebook rooted at a directory.
#[derive(Debug, Clone)]
pub struct Notebook {
    /// Root path of the notebook.
    pub root: PathBuf,
}

impl Notebook {
    /// Open a notebook at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(Error::NotebookNotFound(root));
        }

        Ok(Self { root })
    }

    /// Notebook name (last path component).
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.to_string_lossy().into_owned())
    }

    /// Check whether `path` lies under this notebook.
    pub fn contains(&self, path: &Path) -> bool {
        let root = canonical(&self.root);
        canonical(path).starts_with(root)
    }

    /// List all markdown files in the notebook, recursively, sorted by path.
    ///
    /// Hidden files and directories are skipped.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let mut notes: Vec<PathBuf> = list_matching(&self.root, "**/*.md")?
            .into_iter()
            .filter(|path| {
                path.strip_prefix(&self.root)
                    .map(|relative| {
                        !relative
                            .components()
                            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
                    })
                    .unwrap_or(false)
            })
            .collect();

        notes.sort();
        Ok(notes)
    }
}

/// List markdown files directly inside `dir`, sorted by path.
pub fn list_folder_notes(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut notes: Vec<PathBuf> = list_matching(dir, "*.md")?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .map(|n| !n.to_string_lossy().starts_with('.'))
                .unwrap_or(false)
        })
        .collect();

    notes.sort();
    Ok(notes)
}

fn list_matching(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = format!("{}/{}", Pattern::escape(&dir.to_string_lossy()), pattern);

    let mut paths = Vec::new();
    for entry in glob(&full_pattern)? {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => {
                // Log but continue on unreadable entries
                warn!(error = %e, "glob error");
            }
        }
    }

    Ok(paths)
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
