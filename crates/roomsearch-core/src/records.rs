//! Utilities for records output format
//!
//! A records stream is one `H` header line followed by `E` (trace event) and
//! `P` (path step) lines. Free text is double-quoted.

use crate::search::TraceEvent;
use crate::session::SearchReport;

/// Escape double quotes in a string for records format.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Header line describing a finished search
pub fn format_search_header(report: &SearchReport) -> String {
    format!(
        "H roomsearch=1 records=1 mode=search algorithm={} start={} goal={} status={} expanded={} length={}",
        report.algorithm,
        report.start,
        report.goal,
        report.status,
        report.expanded,
        report.path_length
    )
}

/// One `E` line per trace event
pub fn format_event_record(event: &TraceEvent) -> String {
    match event {
        TraceEvent::Visiting { room }
        | TraceEvent::Visited { room }
        | TraceEvent::Found { room }
        | TraceEvent::PathStep { room } => format!("E {} {}", event.kind(), room),
        TraceEvent::Status { message, detail } => format!(
            "E {} \"{}\" \"{}\"",
            event.kind(),
            escape_quotes(message),
            escape_quotes(detail)
        ),
    }
}

/// `P <index> <room>` for every room on the path
pub fn format_path_records(path: &[String]) -> Vec<String> {
    path.iter()
        .enumerate()
        .map(|(i, room)| format!("P {} {}", i, room))
        .collect()
}
