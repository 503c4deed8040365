//! Outline command: print a note's heading table.

use crate::cli::output::Output;
use crate::error::{ExitCode, Result};
use crate::note::Note;
use crate::search::{Document, OutlineEntry};
use serde::Serialize;
use std::path::Path;

/// Output for the outline command.
#[derive(Debug, Serialize)]
pub struct OutlineOutput {
    pub name: String,
    pub path: String,
    pub entries: Vec<OutlineEntry>,
}

pub fn run(path: &Path, output: &Output) -> Result<ExitCode> {
    let note = Note::load(path)?;

    let response = OutlineOutput {
        name: Document::name(&note).to_string(),
        path: note.path(),
        entries: note.outline().unwrap_or_default(),
    };

    output.print(&response)?;
    Ok(ExitCode::Success)
}
