//! CLI argument parsing for roomsearch
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config, --graph

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use roomsearch_core::error::RoomsearchError;
pub use roomsearch_core::format::OutputFormat;

/// Roomsearch - classical graph-search strategies traced over a house floor plan
#[derive(Parser, Debug)]
#[command(name = "roomsearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `roomsearch_core=trace`)
    #[arg(long, global = true, env = "ROOMSEARCH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./roomsearch.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Graph definition to search instead of the built-in house
    #[arg(long, global = true)]
    pub graph: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two rooms
    Search(SearchArgs),

    /// List the rooms of the graph
    Rooms,

    /// List the available search algorithms
    Algorithms,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Room to start from
    pub start: String,

    /// Room to reach
    pub goal: String,

    /// Search algorithm key (see `roomsearch algorithms`)
    #[arg(long, short)]
    pub algorithm: Option<String>,

    /// Depth bound for depth-limited search
    #[arg(long)]
    pub limit: Option<usize>,

    /// Largest depth tried by iterative-deepening search
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Include every trace event in the output
    #[arg(long, short)]
    pub trace: bool,
}

/// Output format named on the raw command line
///
/// Used when clap rejects the arguments before `Cli.format` exists. The last
/// `--format` wins, matching clap.
pub fn requested_format(args: &[String]) -> Option<OutputFormat> {
    args.iter().enumerate().rev().find_map(|(i, arg)| {
        let value = match arg.strip_prefix("--format")? {
            "" => args.get(i + 1)?.as_str(),
            rest => rest.strip_prefix('=')?,
        };
        value.parse().ok()
    })
}

/// Error to report for a failed parse, or `None` when clap should print and exit
///
/// Help and version requests surface as errors from `try_parse`; everything
/// else is a malformed invocation.
pub fn parse_failure(err: &clap::Error) -> Option<RoomsearchError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(RoomsearchError::UsageError(err.to_string())),
    }
}
