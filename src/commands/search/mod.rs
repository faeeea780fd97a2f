//! `roomsearch search` command - find a path between two rooms
//!
//! - `roomsearch search <start> <goal>` - run the configured default algorithm
//! - `--algorithm` picks a strategy by registry key
//! - `--limit` / `--max-depth` override the depth bounds
//! - `--trace` includes every trace event in the output
//! - Ctrl-C cancels the running search

pub mod format;

use tracing::debug;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::CommandContext;
use roomsearch_core::bail_usage;
use roomsearch_core::error::{Result, RoomsearchError};
use roomsearch_core::search::{Algorithm, CancellationToken, NullSink, TraceLog, TraceSink};

use self::format::{output_human, output_json, output_records, LiveTrace};

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let cli = ctx.cli;
    let config = ctx.load_config()?;
    let mut session = ctx.open_session(&config)?;

    let mut options = *session.options();
    if let Some(limit) = args.limit {
        options.depth_limit = limit;
    }
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    session.set_options(options);

    let algorithm: Algorithm = args
        .algorithm
        .as_deref()
        .unwrap_or(&config.default_algorithm)
        .parse()?;
    if args.limit.is_some() && algorithm != Algorithm::DepthLimited {
        bail_usage!("--limit only applies to depth-limited search");
    }
    if args.max_depth.is_some() && algorithm != Algorithm::IterativeDeepening {
        bail_usage!("--max-depth only applies to iterative-deepening search");
    }

    debug!(
        algorithm = %algorithm,
        start = %args.start,
        goal = %args.goal,
        ?options,
        "search_params"
    );

    install_interrupt_handler(session.token());

    // Human traces stream as they happen; the other formats need the report first
    let mut null = NullSink;
    let mut live = LiveTrace;
    let mut log = TraceLog::new();
    let sink: &mut dyn TraceSink = match (args.trace, cli.format) {
        (false, _) => &mut null,
        (true, OutputFormat::Human) => &mut live,
        (true, _) => &mut log,
    };

    let report = session.run_search(algorithm.key(), &args.start, &args.goal, sink)?;

    debug!(
        status = %report.status,
        expanded = report.expanded,
        elapsed = ?ctx.start.elapsed(),
        "search"
    );

    if report.cancelled() {
        return Err(RoomsearchError::Interrupted);
    }

    let events = args.trace.then(|| log.into_events());
    match cli.format {
        OutputFormat::Json => output_json(&report, events.as_deref())?,
        OutputFormat::Human => output_human(cli, session.graph(), &report),
        OutputFormat::Records => output_records(&report, events.as_deref()),
    }

    Ok(())
}

/// Cancel `token` on Ctrl-C
fn install_interrupt_handler(token: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || token.cancel()) {
        debug!(error = %e, "interrupt handler not installed");
    }
}
