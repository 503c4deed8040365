//! Heading parsing and outline extraction.

use crate::parser::code_block::{find_fenced_blocks, is_line_in_fenced_block};
use crate::search::OutlineEntry;
use regex::Regex;
use std::sync::LazyLock;

// ATX-style heading: # Heading, ## Heading, etc., indented by at most three
// spaces. A bare "#" is an empty heading.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?(?:[ \t]+\^[a-zA-Z0-9_-]+)?[ \t]*$").unwrap()
});

/// A heading found in a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The heading text (without the # prefix). May be empty.
    pub text: String,

    /// The heading level (1-6).
    pub level: u8,

    /// Line number where this heading appears (1-indexed).
    pub line: usize,
}

/// Parse all headings from content.
pub fn parse_headings(content: &str) -> Vec<Heading> {
    let blocks = find_fenced_blocks(content);
    let mut headings = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line_num = line_idx + 1; // 1-indexed

        // Skip lines inside fenced code blocks
        if is_line_in_fenced_block(line_num, &blocks) {
            continue;
        }

        if let Some(cap) = HEADING.captures(line) {
            let level = cap.get(1).map_or(0, |m| m.as_str().len()) as u8;
            let text = strip_closing_sequence(cap.get(2).map_or("", |m| m.as_str().trim()));

            headings.push(Heading {
                text: text.to_string(),
                level,
                line: line_num,
            });
        }
    }

    headings
}

/// Drop an optional closing run of `#`. It only counts when it is the whole
/// text or follows whitespace, so `C#` keeps its hash.
fn strip_closing_sequence(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.is_empty() {
        ""
    } else if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        text
    }
}

/// Build the outline table of a note: one entry per heading, indexed by position.
pub fn parse_outline(content: &str) -> Vec<OutlineEntry> {
    parse_headings(content)
        .into_iter()
        .enumerate()
        .map(|(i, h)| OutlineEntry::new(i as i64, h.text))
        .collect()
}
