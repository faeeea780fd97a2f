//! Roomsearch - classical graph-search strategies on a house floor plan
//!
//! A command-line tool that runs breadth-first, depth-first, A* and six other
//! search strategies between two rooms and reports the path and the trace.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use roomsearch_core::error::{ExitCode as RoomsearchExitCode, RoomsearchError};
use roomsearch_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let args: Vec<String> = env::args().skip(1).collect();
            // Only JSON callers get an envelope; clap renders everything else
            match (cli::requested_format(&args), cli::parse_failure(&err)) {
                (Some(OutputFormat::Json), Some(error)) => {
                    return report(&error, OutputFormat::Json, false)
                }
                _ => err.exit(),
            }
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RoomsearchExitCode::Success as u8),
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Print `error` in the requested format and return its exit code
fn report(error: &RoomsearchError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}
