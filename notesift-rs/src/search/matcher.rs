//! Keyword compilation and line matching.

use crate::error::SearchError;
use crate::search::types::{OptionSet, SearchOption};
use regex::{Regex, RegexBuilder};

/// A keyword compiled together with its matching options.
#[derive(Debug, Clone)]
pub enum CompiledMatcher {
    /// Built from an empty keyword; never matches.
    Empty,
    /// Unanchored pattern search.
    Pattern(Regex),
}

impl CompiledMatcher {
    /// Compile `keyword` under `options`.
    ///
    /// In regular-expression mode the keyword is used as the pattern as-is
    /// and `WholeWordOnly` has no effect. Otherwise the keyword is escaped and,
    /// with `WholeWordOnly`, wrapped in word boundaries. Case sensitivity
    /// applies to both modes.
    pub fn compile(keyword: &str, options: OptionSet) -> Result<Self, SearchError> {
        if keyword.is_empty() {
            return Ok(CompiledMatcher::Empty);
        }

        let pattern = if options.contains(SearchOption::RegularExpression) {
            keyword.to_string()
        } else {
            let escaped = regex::escape(keyword);
            if options.contains(SearchOption::WholeWordOnly) {
                format!(r"\b{}\b", escaped)
            } else {
                escaped
            }
        };

        let re = RegexBuilder::new(&pattern)
            .case_insensitive(!options.contains(SearchOption::CaseSensitive))
            .build()
            .map_err(|e| SearchError::InvalidPattern {
                pattern: keyword.to_string(),
                message: e.to_string(),
            })?;

        Ok(CompiledMatcher::Pattern(re))
    }

    /// Check whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            CompiledMatcher::Empty => false,
            CompiledMatcher::Pattern(re) => re.is_match(text),
        }
    }
}
