//! CLI argument parsing for textsim
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use textsim_core::format::OutputFormat;
use textsim_core::vector::Weighting;

/// Textsim - n-gram document similarity CLI
#[derive(Parser, Debug)]
#[command(name = "textsim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "TEXTSIM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to an analysis configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two document files chunk by chunk
    Compare {
        /// First document (.txt, .md)
        file_a: PathBuf,

        /// Second document (.txt, .md)
        file_b: PathBuf,

        /// N-gram order
        #[arg(long, short)]
        n: Option<usize>,

        /// Number of most similar chunk pairs to report
        #[arg(long)]
        top_n: Option<usize>,

        /// Term weighting (tf or tfidf)
        #[arg(long, value_parser = parse_weighting)]
        weighting: Option<Weighting>,

        /// Minimum paragraph length in characters
        #[arg(long)]
        min_chunk_chars: Option<usize>,
    },

    /// Compare two short texts given on the command line
    Short {
        /// First text
        text_a: String,

        /// Second text
        text_b: String,

        /// N-gram order
        #[arg(long, short)]
        n: Option<usize>,
    },
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse term weighting from string
fn parse_weighting(s: &str) -> Result<Weighting, String> {
    s.parse::<Weighting>().map_err(|e| e.to_string())
}
