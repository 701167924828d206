//! Command line argument parsing for the lexcheck CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// lexcheck - check word lists against a dictionary and suggest corrections
#[derive(Parser, Debug, Clone)]
#[command(name = "lexcheck")]
#[command(about = "Check words against a dictionary and suggest corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexcheckArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Dictionary file with one word per line
    #[arg(short, long, default_value = "words.txt", value_name = "DICT_FILE")]
    pub dictionary: PathBuf,

    /// Words to check: literal words, or `name.ext` files of newline-delimited words
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,
}

impl LexcheckArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for check results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-word verdict lines plus a summary line.
    Human,
    /// The full report as a JSON document.
    Json,
}
