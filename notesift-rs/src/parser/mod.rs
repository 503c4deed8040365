//! Markdown parsing for note outlines.

pub mod code_block;
pub mod heading;

pub use code_block::{FencedBlock, find_fenced_blocks};
pub use heading::{Heading, parse_headings, parse_outline};
