//! Fenced code block detection, so headings inside code are ignored.

use regex::Regex;
use std::sync::LazyLock;

/// Lines spanned by a fenced code block, fences included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock {
    /// Line of the opening fence (1-indexed).
    pub start_line: usize,
    /// Line of the closing fence (1-indexed).
    pub end_line: usize,
}

impl FencedBlock {
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

// Opening fence: ``` or ~~~ at start of line
static FENCE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(`{3,}|~{3,})").unwrap());

/// Find all closed fenced code blocks in content.
///
/// An opening fence without a matching close is not a block.
pub fn find_fenced_blocks(content: &str) -> Vec<FencedBlock> {
    let lines: Vec<&str> = content.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(fence) = FENCE_OPEN.find(lines[i]) else {
            i += 1;
            continue;
        };
        let fence = fence.as_str();

        let close = (i + 1..lines.len()).find(|&j| is_closing_fence(lines[j], fence));
        match close {
            Some(j) => {
                blocks.push(FencedBlock {
                    start_line: i + 1,
                    end_line: j + 1,
                });
                i = j + 1;
            }
            None => i += 1,
        }
    }

    blocks
}

fn is_closing_fence(line: &str, open: &str) -> bool {
    let Some(fence_char) = open.chars().next() else {
        return false;
    };
    let trimmed = line.trim();
    line.starts_with(open) && trimmed.len() >= open.len() && trimmed.chars().all(|c| c == fence_char)
}

/// Check if a line number is inside any fenced code block.
pub fn is_line_in_fenced_block(line: usize, blocks: &[FencedBlock]) -> bool {
    blocks.iter().any(|b| b.contains_line(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_code_block() {
        let content = "Some text\n\n```rust\n# not a heading\n```\n\nMore text";
        let blocks = find_fenced_blocks(content);
        assert_eq!(blocks, vec![FencedBlock { start_line: 3, end_line: 5 }]);
        assert!(is_line_in_fenced_block(4, &blocks));
        assert!(!is_line_in_fenced_block(6, &blocks));
    }

    #[test]
    fn test_tilde_and_backtick_blocks() {
        let content = "```\nouter\n```\n\ntext\n\n~~~\ninner\n~~~";
        let blocks = find_fenced_blocks(content);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].start_line, 7);
    }

    #[test]
    fn test_mismatched_fence_does_not_close() {
        let content = "````\n```\nstill code\n````";
        let blocks = find_fenced_blocks(content);
        assert_eq!(blocks, vec![FencedBlock { start_line: 1, end_line: 4 }]);
    }

    #[test]
    fn test_unclosed_fence_is_not_a_block() {
        let content = "```rust\ncode\n\n~~~\nfenced\n~~~";
        let blocks = find_fenced_blocks(content);
        assert_eq!(blocks, vec![FencedBlock { start_line: 4, end_line: 6 }]);
    }
}
