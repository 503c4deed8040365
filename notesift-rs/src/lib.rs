//! Notesift - scoped, cancellable search over markdown notes.
//!
//! # Overview
//!
//! A search is described by a [`SearchConfig`]: which notes to look at
//! (scope), what to match (note name, outline headings or content), which
//! entity kinds qualify (target), the matching options and a keyword.
//! [`SearchEngine::run`] compiles the keyword, walks the candidates a
//! [`DocumentLookup`] supplies for the scope and returns a [`ResultModel`]:
//! one item per matching note, each with its matching headings or lines.
//!
//! Runs are synchronous. A [`CancelToken`] obtained from the engine stops a
//! run between candidates; the items found so far are kept.
//!
//! # Example
//!
//! ```no_run
//! use notesift::{Note, Object, SearchConfig, SearchEngine, Workspace};
//!
//! let mut workspace = Workspace::new();
//! workspace.set_current(Note::load("guide.md".as_ref()).unwrap());
//!
//! let config = SearchConfig::new("intro").with_object(Object::Outline);
//! let result = SearchEngine::new().run(&config, &workspace);
//! for item in &result.items {
//!     println!("{}: {} headings", item.label(), item.sub_matches.len());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod note;
pub mod notebook;
pub mod parser;
pub mod search;
pub mod tree;
pub mod workspace;

// Re-export main types at crate root
pub use config::Config;
pub use error::{Error, Result, SearchError};
pub use note::Note;
pub use notebook::Notebook;
pub use search::*;
pub use tree::{ResultTree, TreeRow};
pub use workspace::Workspace;
