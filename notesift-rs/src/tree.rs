//! Tree rows built from search results, for display.

use crate::search::{ResultItem, ResultSubItem};
use serde::Serialize;
use std::fmt;

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    pub label: String,
    pub tooltip: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeRow>,
}

impl TreeRow {
    fn from_item(item: &ResultItem) -> Self {
        Self {
            label: item.label().to_string(),
            tooltip: item.path.clone(),
            children: item.sub_matches.iter().map(Self::from_sub_item).collect(),
        }
    }

    fn from_sub_item(sub: &ResultSubItem) -> Self {
        let label = if sub.has_line() {
            format!("[{}] {}", sub.line_number, sub.text)
        } else {
            sub.text.clone()
        };

        Self {
            label,
            tooltip: sub.text.clone(),
            children: Vec::new(),
        }
    }
}

type CountObserver = Box<dyn FnMut(usize) + Send>;

/// Result tree with a count-changed notification.
#[derive(Default)]
pub struct ResultTree {
    rows: Vec<TreeRow>,
    data: Vec<ResultItem>,
    on_count_changed: Option<CountObserver>,
}

impl ResultTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the observer told the top-level row count after each change.
    pub fn on_count_changed(&mut self, observer: impl FnMut(usize) + Send + 'static) {
        self.on_count_changed = Some(Box::new(observer));
    }

    /// Replace the tree with `items`.
    pub fn update_results(&mut self, items: &[ResultItem]) {
        self.rows.clear();
        self.data.clear();

        for item in items {
            self.append_item(item);
        }

        self.notify();
    }

    pub fn clear_results(&mut self) {
        self.rows.clear();
        self.data.clear();
        self.notify();
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    /// The item behind the top-level row at `index`.
    pub fn item(&self, index: usize) -> Option<&ResultItem> {
        self.data.get(index)
    }

    pub fn top_level_count(&self) -> usize {
        self.rows.len()
    }

    fn append_item(&mut self, item: &ResultItem) {
        self.data.push(item.clone());
        self.rows.push(TreeRow::from_item(item));
    }

    fn notify(&mut self) {
        let count = self.top_level_count();
        if let Some(observer) = self.on_count_changed.as_mut() {
            observer(count);
        }
    }
}

impl fmt::Display for ResultTree {
    /// Indented plain-text rendering, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.label)?;
            for child in &row.children {
                writeln!(f, "    {}", child.label)?;
            }
        }
        Ok(())
    }
}
