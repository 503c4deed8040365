//! CLI argument definitions using clap.

use crate::search::{Object, Scope, Target};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notesift")]
#[command(author, version, about = "Scoped search over markdown notes", long_about = None)]
pub struct Cli {
    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search notes by name, outline or content
    Search(SearchArgs),

    /// Print the outline table of a note
    Outline(OutlineArgs),
}

// === Search ===

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Keyword to search for
    pub keyword: String,

    /// Which notes to search
    #[arg(long, value_enum)]
    pub scope: Option<Scope>,

    /// What to match against (repeatable; name wins over outline over content)
    #[arg(long, value_enum)]
    pub object: Vec<Object>,

    /// Which entity kinds to search (repeatable)
    #[arg(long, value_enum)]
    pub target: Vec<Target>,

    /// Match case exactly
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Only match whole words
    #[arg(short = 'w', long)]
    pub whole_word: bool,

    /// Treat the keyword as a regular expression
    #[arg(short = 'e', long)]
    pub regex: bool,

    /// The current note
    #[arg(long)]
    pub current: Option<PathBuf>,

    /// An opened note (repeatable)
    #[arg(long = "open")]
    pub opened: Vec<PathBuf>,

    /// A notebook root directory (repeatable, adds to configured notebooks)
    #[arg(long)]
    pub notebook: Vec<PathBuf>,

    /// Print results as an indented tree instead of structured output
    #[arg(long)]
    pub tree: bool,
}

// === Outline ===

#[derive(Parser, Debug)]
pub struct OutlineArgs {
    /// Path to the note
    pub path: PathBuf,
}
