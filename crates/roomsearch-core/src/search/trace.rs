//! Trace events emitted by the search engine
//!
//! The engine calls a `TraceSink` synchronously, in event order, and never
//! buffers. Each call is a point where the caller may observe progress, pace
//! the search, or cancel it.

use serde::Serialize;

/// Receiver for search progress notifications
pub trait TraceSink {
    /// A room is about to be expanded
    fn on_visiting(&mut self, room: &str);

    /// A room has been expanded
    fn on_visited(&mut self, room: &str);

    /// The goal (or, for bidirectional search, the meeting point) was reached
    fn on_found(&mut self, room: &str);

    /// One room of the reported path, emitted start to goal
    fn on_path_step(&mut self, room: &str);

    fn on_status(&mut self, message: &str, detail: &str);
}

/// A recorded trace event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    Visiting { room: String },
    Visited { room: String },
    Found { room: String },
    PathStep { room: String },
    Status { message: String, detail: String },
}

impl TraceEvent {
    /// Short label used by the records output format
    pub fn kind(&self) -> &'static str {
        match self {
            TraceEvent::Visiting { .. } => "visiting",
            TraceEvent::Visited { .. } => "visited",
            TraceEvent::Found { .. } => "found",
            TraceEvent::PathStep { .. } => "path",
            TraceEvent::Status { .. } => "status",
        }
    }
}

/// Sink that keeps every event in order
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// Rooms in the order they were announced as `visiting`
    pub fn visiting_order(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Visiting { room } => Some(room.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rooms announced as path steps
    pub fn path_steps(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::PathStep { room } => Some(room.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl TraceSink for TraceLog {
    fn on_visiting(&mut self, room: &str) {
        self.events.push(TraceEvent::Visiting {
            room: room.to_string(),
        });
    }

    fn on_visited(&mut self, room: &str) {
        self.events.push(TraceEvent::Visited {
            room: room.to_string(),
        });
    }

    fn on_found(&mut self, room: &str) {
        self.events.push(TraceEvent::Found {
            room: room.to_string(),
        });
    }

    fn on_path_step(&mut self, room: &str) {
        self.events.push(TraceEvent::PathStep {
            room: room.to_string(),
        });
    }

    fn on_status(&mut self, message: &str, detail: &str) {
        self.events.push(TraceEvent::Status {
            message: message.to_string(),
            detail: detail.to_string(),
        });
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn on_visiting(&mut self, _room: &str) {}
    fn on_visited(&mut self, _room: &str) {}
    fn on_found(&mut self, _room: &str) {}
    fn on_path_step(&mut self, _room: &str) {}
    fn on_status(&mut self, _message: &str, _detail: &str) {}
}
