//! Error types and exit codes for Notesift.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the `notesift` binary.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const SEARCH_FAILED: i32 = 3;
    pub const SEARCH_CANCELLED: i32 = 4;
}

/// Errors a search run can end with.
///
/// These never escape [`SearchEngine::run`](crate::search::SearchEngine::run);
/// they are recorded on the returned [`ResultModel`](crate::search::ResultModel).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Unsupported search: {0}")]
    Unsupported(String),

    #[error("A search is already in progress")]
    Busy,

    #[error("Failed to enumerate candidates: {0}")]
    Lookup(String),
}

/// Main error type for Notesift operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Notebook not found: {0}")]
    NotebookNotFound(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl Error {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            Error::Search(_) => exit_code::SEARCH_FAILED,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for Notesift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    GeneralError,
    NoteNotFound,
    SearchFailed,
    SearchCancelled,
}

impl ExitCode {
    /// Convert to exit code integer.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => exit_code::SUCCESS,
            ExitCode::GeneralError => exit_code::GENERAL_ERROR,
            ExitCode::NoteNotFound => exit_code::NOTE_NOT_FOUND,
            ExitCode::SearchFailed => exit_code::SEARCH_FAILED,
            ExitCode::SearchCancelled => exit_code::SEARCH_CANCELLED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::NoteNotFound(PathBuf::from("a.md")).exit_code(), 2);
        assert_eq!(Error::Search(SearchError::Busy).exit_code(), 3);
        assert_eq!(Error::ConfigError("bad".into()).exit_code(), 1);
        assert_eq!(ExitCode::SearchCancelled.code(), 4);
    }

    #[test]
    fn test_invalid_pattern_message() {
        let err = SearchError::InvalidPattern {
            pattern: "(unclosed".to_string(),
            message: "unclosed group".to_string(),
        };
        assert!(err.to_string().contains("(unclosed"));
        assert!(err.to_string().contains("unclosed group"));
    }
}
