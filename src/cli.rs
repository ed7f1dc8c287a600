//! Command-line argument parsing for the `quill` binary
//!
//! Supports:
//! - Printing a file with ANSI colours from the active style table
//! - Dumping style runs or raw style letters for inspection

use clap::Parser;
use std::path::PathBuf;

/// Highlight a C-like source file
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Highlight a C-like source file")]
pub struct CliArgs {
    /// File to highlight
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print one line per style run instead of coloured text
    #[arg(long, conflicts_with = "letters")]
    pub runs: bool,

    /// Print the style letter of every character (A = plain ... E = preprocessor)
    #[arg(long)]
    pub letters: bool,

    /// Theme id to use instead of the configured one
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Disable syntax highlighting
    #[arg(long)]
    pub no_highlight: bool,

    /// Also write debug logs to the config log directory
    #[arg(long)]
    pub log_file: bool,
}

/// How the highlighted file is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Ansi,
    Runs,
    Letters,
}

impl CliArgs {
    pub fn output_mode(&self) -> OutputMode {
        if self.runs {
            OutputMode::Runs
        } else if self.letters {
            OutputMode::Letters
        } else {
            OutputMode::Ansi
        }
    }
}
