//! User configuration: known notebooks and search defaults.

use crate::error::{Error, Result};
use crate::search::{Object, ObjectSet, OptionSet, Scope, SearchOption, Target, TargetSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "NOTESIFT_CONFIG";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notebook root directories.
    pub notebooks: Vec<PathBuf>,

    /// Defaults for `notesift search`.
    pub search: SearchDefaults,
}

/// Search settings used when the command line leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    pub scope: Scope,
    pub object: ObjectSet,
    pub target: TargetSet,
    pub case_sensitive: bool,
    pub whole_word_only: bool,
    pub regular_expression: bool,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            scope: Scope::CurrentNote,
            object: Object::Name.into(),
            target: Target::Note.into(),
            case_sensitive: false,
            whole_word_only: false,
            regular_expression: false,
        }
    }
}

impl SearchDefaults {
    /// The enabled matching options.
    pub fn options(&self) -> OptionSet {
        let mut options = OptionSet::empty();
        if self.case_sensitive {
            options.insert(SearchOption::CaseSensitive);
        }
        if self.whole_word_only {
            options.insert(SearchOption::WholeWordOnly);
        }
        if self.regular_expression {
            options.insert(SearchOption::RegularExpression);
        }
        options
    }
}

impl Config {
    /// Default config file location (`<config_dir>/notesift/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("notesift").join("config.toml"))
    }

    /// Load the config from `$NOTESIFT_CONFIG` or the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path);

        match path {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.search.options().is_empty());
    }

    #[test]
    fn test_parse_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
notebooks = ["/notes/work", "/notes/home"]

[search]
scope = "all-notebooks"
object = ["outline"]
case_sensitive = true
regular_expression = true
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.notebooks.len(), 2);
        assert_eq!(config.search.scope, Scope::AllNotebooks);
        assert!(config.search.object.contains(Object::Outline));
        assert!(!config.search.object.contains(Object::Name));
        // Unset keys keep their defaults
        assert!(config.search.target.contains(Target::Note));

        let options = config.search.options();
        assert!(options.contains(SearchOption::CaseSensitive));
        assert!(options.contains(SearchOption::RegularExpression));
        assert!(!options.contains(SearchOption::WholeWordOnly));
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nscope = \"everywhere\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
