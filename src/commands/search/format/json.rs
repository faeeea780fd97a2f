//! JSON output formatting for search command

use roomsearch_core::error::Result;
use roomsearch_core::search::TraceEvent;
use roomsearch_core::session::SearchReport;

/// Output in JSON format
///
/// The report object, with an `events` array when a trace was requested.
pub fn output_json(report: &SearchReport, events: Option<&[TraceEvent]>) -> Result<()> {
    let mut output = serde_json::to_value(report)?;

    if let Some(events) = events {
        if let Some(obj) = output.as_object_mut() {
            obj.insert("events".to_string(), serde_json::to_value(events)?);
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
