//! Hierarchical search results.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// State of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    #[default]
    Idle,
    Busy,
    Success,
    Fail,
    Cancelled,
}

impl SearchState {
    /// Whether the run has finished.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SearchState::Success | SearchState::Fail | SearchState::Cancelled
        )
    }
}

/// One matched location inside an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSubItem {
    /// Line or outline index, `-1` when there is none.
    pub line_number: i64,
    /// The matched line or heading, unmodified.
    pub text: String,
}

impl ResultSubItem {
    pub const NO_LINE: i64 = -1;

    pub fn new(line_number: i64, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }

    pub fn has_line(&self) -> bool {
        self.line_number > Self::NO_LINE
    }
}

/// One matched entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Locator of the entity.
    pub path: String,
    /// Label to display. Empty means show `path` instead.
    pub display_text: String,
    /// Matches within the entity, in discovery order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_matches: Vec<ResultSubItem>,
}

impl ResultItem {
    pub fn new(path: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            display_text: display_text.into(),
            sub_matches: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.display_text.is_empty()
    }

    /// The display text, falling back to the path.
    pub fn label(&self) -> &str {
        if self.display_text.is_empty() {
            &self.path
        } else {
            &self.display_text
        }
    }

    pub fn push_match(&mut self, sub_item: ResultSubItem) {
        self.sub_matches.push(sub_item);
    }
}

/// Aggregate produced by one search run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultModel {
    pub state: SearchState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
    #[serde(skip)]
    pub error: Option<SearchError>,
    pub items: Vec<ResultItem>,
}

impl ResultModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Empty items are ignored.
    pub fn add_item(&mut self, item: ResultItem) {
        debug_assert!(!item.is_empty(), "empty result item");
        if item.is_empty() {
            return;
        }
        self.items.push(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn has_results(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Record a problem that did not stop the run.
    pub fn record_error(&mut self, message: impl AsRef<str>) {
        if !self.error_message.is_empty() {
            self.error_message.push('\n');
        }
        self.error_message.push_str(message.as_ref());
    }

    pub(crate) fn start(&mut self) {
        debug_assert_eq!(self.state, SearchState::Idle);
        self.state = SearchState::Busy;
    }

    pub(crate) fn succeed(&mut self) {
        self.finish(SearchState::Success);
    }

    pub(crate) fn cancel(&mut self) {
        self.finish(SearchState::Cancelled);
    }

    pub(crate) fn fail(&mut self, error: SearchError) {
        self.record_error(error.to_string());
        self.error = Some(error);
        self.finish(SearchState::Fail);
    }

    fn finish(&mut self, state: SearchState) {
        debug_assert!(
            !self.state.is_terminal(),
            "result finalized twice: {:?} -> {:?}",
            self.state,
            state
        );
        self.state = state;
    }

    /// One-line description for log output.
    pub fn summary(&self) -> String {
        let sub_items: usize = self.items.iter().map(|i| i.sub_matches.len()).sum();
        format!(
            "search result: state {:?} err {} items {} sub-items {}",
            self.state,
            self.has_error(),
            self.items.len(),
            sub_items
        )
    }
}
