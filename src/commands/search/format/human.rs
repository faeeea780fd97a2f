//! Human-readable output formatting for search command

use crate::cli::Cli;
use roomsearch_core::graph::{GraphModel, GraphProvider};
use roomsearch_core::search::TraceSink;
use roomsearch_core::session::SearchReport;

/// Output in human-readable format
pub fn output_human(cli: &Cli, graph: &GraphModel, report: &SearchReport) {
    let name = report.algorithm.display_name();

    if report.found() {
        println!(
            "{} ({} steps): {}",
            name,
            report.path_length,
            report.path.join(" -> ")
        );
        if !cli.quiet {
            let names: Vec<&str> = report
                .path
                .iter()
                .map(|id| graph.room(id).map_or(id.as_str(), |room| room.name.as_str()))
                .collect();
            println!("  {}", names.join(" -> "));
        }
    } else {
        println!("{}: no path from {} to {}", name, report.start, report.goal);
    }

    if !cli.quiet {
        println!("Expanded {} rooms", report.expanded);
    }
}

/// Sink that prints each trace event as it happens
pub struct LiveTrace;

impl TraceSink for LiveTrace {
    fn on_visiting(&mut self, room: &str) {
        println!("  visiting {}", room);
    }

    fn on_visited(&mut self, room: &str) {
        println!("  visited  {}", room);
    }

    fn on_found(&mut self, room: &str) {
        println!("  found    {}", room);
    }

    fn on_path_step(&mut self, room: &str) {
        println!("  path     {}", room);
    }

    fn on_status(&mut self, message: &str, detail: &str) {
        if detail.is_empty() {
            println!("{}", message);
        } else {
            println!("{} ({})", message, detail);
        }
    }
}
