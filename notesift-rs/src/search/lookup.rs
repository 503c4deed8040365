//! Read-only interfaces the engine uses to reach documents.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One row of a document's outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Position of the heading within the outline.
    pub index: i64,
    /// Heading text.
    pub text: String,
}

impl OutlineEntry {
    pub fn new(index: i64, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Placeholder rows carry no heading text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A note that can be searched.
pub trait Document: Send + Sync {
    /// Display name.
    fn name(&self) -> &str;

    /// Stable locator used for navigation.
    fn path(&self) -> String;

    /// Heading table, or `None` when no view of the document is available.
    fn outline(&self) -> Option<Vec<OutlineEntry>>;

    /// Full text, when the collaborator exposes it.
    fn content(&self) -> Option<&str> {
        None
    }
}

pub type DocumentRef = Arc<dyn Document>;

/// Candidate sources for each search scope.
pub trait DocumentLookup {
    /// The active document, if any.
    fn current_document(&self) -> Result<Option<DocumentRef>>;

    /// Every open document, in tab order.
    fn opened_documents(&self) -> Result<Vec<DocumentRef>>;

    /// Notes directly in the folder of the current document.
    fn current_folder_documents(&self) -> Result<Vec<DocumentRef>>;

    /// Notes in the notebook holding the current document.
    fn current_notebook_documents(&self) -> Result<Vec<DocumentRef>>;

    /// Notes across every notebook.
    fn all_notebook_documents(&self) -> Result<Vec<DocumentRef>>;
}
