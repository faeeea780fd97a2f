//! Records output formatting for search command

use roomsearch_core::records::{format_event_record, format_path_records, format_search_header};
use roomsearch_core::search::TraceEvent;
use roomsearch_core::session::SearchReport;

/// Output in records format
pub fn output_records(report: &SearchReport, events: Option<&[TraceEvent]>) {
    println!("{}", format_search_header(report));

    for event in events.unwrap_or_default() {
        println!("{}", format_event_record(event));
    }

    for line in format_path_records(&report.path) {
        println!("{}", line);
    }
}
