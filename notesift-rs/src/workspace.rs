//! Filesystem-backed document lookup.

use crate::error::Result;
use crate::note::Note;
use crate::notebook::{Notebook, list_folder_notes};
use crate::search::{DocumentLookup, DocumentRef};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// The notes and notebooks a search can see.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    current: Option<Arc<Note>>,
    opened: Vec<Arc<Note>>,
    notebooks: Vec<Notebook>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workspace from paths on disk.
    ///
    /// The current note counts as opened. Note bodies are read on demand.
    pub fn load(
        current: Option<&Path>,
        opened: &[PathBuf],
        notebooks: &[PathBuf],
    ) -> Result<Self> {
        let mut workspace = Self::new();

        for root in notebooks {
            workspace.add_notebook(Notebook::open(root)?);
        }
        if let Some(path) = current {
            workspace.set_current(Note::open(path)?);
        }
        for path in opened {
            workspace.open(Note::open(path)?);
        }

        Ok(workspace)
    }

    /// Make `note` the active note and open it.
    pub fn set_current(&mut self, note: Note) {
        let note = Arc::new(note);
        if !self.is_open(&note.path) {
            self.opened.push(Arc::clone(&note));
        }
        self.current = Some(note);
    }

    /// Open a note. Opening an already open note is a no-op.
    pub fn open(&mut self, note: Note) {
        if !self.is_open(&note.path) {
            self.opened.push(Arc::new(note));
        }
    }

    pub fn add_notebook(&mut self, notebook: Notebook) {
        self.notebooks.push(notebook);
    }

    /// The notebook holding the current note, else the first notebook.
    pub fn current_notebook(&self) -> Option<&Notebook> {
        self.current
            .as_ref()
            .and_then(|note| self.notebooks.iter().find(|nb| nb.contains(&note.path)))
            .or_else(|| self.notebooks.first())
    }

    fn is_open(&self, path: &Path) -> bool {
        self.opened.iter().any(|n| n.path == path)
    }

    /// Wrap listed paths as documents. Only the listing touches the disk here.
    fn open_all(paths: Vec<PathBuf>) -> Vec<DocumentRef> {
        paths
            .into_iter()
            .filter_map(|path| match Note::open(&path) {
                Ok(note) => Some(Arc::new(note) as DocumentRef),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to open note");
                    None
                }
            })
            .collect()
    }
}

impl DocumentLookup for Workspace {
    fn current_document(&self) -> Result<Option<DocumentRef>> {
        Ok(self.current.clone().map(|note| note as DocumentRef))
    }

    fn opened_documents(&self) -> Result<Vec<DocumentRef>> {
        Ok(self
            .opened
            .iter()
            .map(|note| Arc::clone(note) as DocumentRef)
            .collect())
    }

    fn current_folder_documents(&self) -> Result<Vec<DocumentRef>> {
        let Some(folder) = self.current.as_ref().map(|n| n.folder().unwrap_or(Path::new("."))) else {
            debug!("no current note, current folder is empty");
            return Ok(Vec::new());
        };
        Ok(Self::open_all(list_folder_notes(folder)?))
    }

    fn current_notebook_documents(&self) -> Result<Vec<DocumentRef>> {
        match self.current_notebook() {
            Some(notebook) => Ok(Self::open_all(notebook.list_notes()?)),
            None => {
                debug!("no notebook configured");
                Ok(Vec::new())
            }
        }
    }

    fn all_notebook_documents(&self) -> Result<Vec<DocumentRef>> {
        let mut paths = Vec::new();
        for notebook in &self.notebooks {
            paths.extend(notebook.list_notes()?);
        }
        Ok(Self::open_all(paths))
    }
}
