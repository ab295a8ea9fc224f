use std::path::PathBuf;

use clap::Parser;

use crate::core::constants::{DEFAULT_BINS, DEFAULT_BLOCK, DEFAULT_WIDTH};

/// Top-level CLI structure.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "text-histo",
    about = "Generate a text-based histogram from data in a file"
)]
pub struct Cli {
    /// Path to the input file (use `-` for stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of bins for numeric data
    #[arg(long, default_value_t = DEFAULT_BINS, allow_negative_numbers = true)]
    pub bins: i64,

    /// Character(s) used to draw histogram bars
    #[arg(long = "char", value_name = "S", default_value = DEFAULT_BLOCK)]
    pub block: String,

    /// Width of the longest bar in characters
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Disable automatic binning for numeric data
    #[arg(long)]
    pub no_binning: bool,

    /// Show a counts column between labels and bars
    #[arg(long = "counts-col")]
    pub counts_col: bool,

    /// Show count values at the end of histogram bars
    #[arg(long)]
    pub counts: bool,

    /// Chart title (defaults to the file name without extension)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Emit timing diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
