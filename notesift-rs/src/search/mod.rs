//! Scoped search over notes.

pub mod engine;
pub mod lookup;
pub mod matcher;
pub mod result;
pub mod types;

pub use engine::{CancelToken, SearchEngine, match_document};
pub use lookup::{Document, DocumentLookup, DocumentRef, OutlineEntry};
pub use matcher::CompiledMatcher;
pub use result::{ResultItem, ResultModel, ResultSubItem, SearchState};
pub use types::*;
