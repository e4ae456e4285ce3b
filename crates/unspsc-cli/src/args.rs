use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for unspsc-cli
#[derive(Debug, Parser)]
#[command(
    name = "unspsc",
    version,
    about = "Find UNSPSC classification codes from free-text equipment descriptions"
)]
pub struct CliArgs {
    /// Path to the reference table (CSV with `Code` and `Description` columns, optionally .gz).
    /// Default: $UNSPSC_DATA, then the standard data directories.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// JSON object of extra acronyms ({"abbr": "expansion"}) merged over the built-in dictionary
    #[arg(short = 'a', long = "acronyms", global = true)]
    pub acronyms: Option<PathBuf>,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search codes by description, abbreviation or partial word
    Search {
        /// Search text (e.g. SEM, "gas chromatograph")
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of results
        #[arg(short = 'n', long = "max", conflicts_with = "page")]
        max: Option<usize>,

        /// Page of results in steps of five (page 2 shows ten)
        #[arg(short = 'p', long = "page")]
        page: Option<usize>,

        /// Minimum similarity a fuzzy match must exceed (0.0 - 1.0)
        #[arg(short = 't', long = "threshold")]
        threshold: Option<f64>,

        /// Time budget for the fuzzy scan in milliseconds
        #[arg(long = "timeout-ms")]
        timeout_ms: Option<u64>,

        /// Print the score of each match
        #[arg(long = "scores")]
        scores: bool,

        /// Print the full outcome as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the variants a query expands to
    Expand {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List the acronym dictionary
    Acronyms {
        /// Only entries whose abbreviation or expansion contains this text
        #[arg(short = 'f', long = "filter")]
        filter: Option<String>,
    },

    /// Lookup a single code
    Code {
        /// UNSPSC code (e.g. 41111720)
        code: String,
    },

    /// Show a summary of the loaded reference table
    Stats,
}
