//! Search sessions
//!
//! A `SearchSession` owns the graph, the engine options and the cancellation
//! token for the search currently in flight. It validates a request before
//! handing it to the engine, so strategies only ever see two distinct rooms
//! that exist.

use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::{Result, RoomsearchError};
use crate::graph::{house_graph, GraphModel, GraphProvider};
use crate::search::{Algorithm, CancellationToken, SearchOptions, SearchStatus, TraceSink};

/// Summary of one completed search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub start: String,
    pub goal: String,
    pub status: SearchStatus,
    pub path: Vec<String>,
    /// Edges on the path
    pub path_length: usize,
    /// Total edge cost; every edge costs 1
    pub cost: usize,
    /// Rooms announced as `visiting`
    pub expanded: usize,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    pub fn cancelled(&self) -> bool {
        self.status == SearchStatus::Cancelled
    }
}

/// One logical search at a time over a fixed graph
#[derive(Debug)]
pub struct SearchSession {
    graph: GraphModel,
    options: SearchOptions,
    token: CancellationToken,
}

impl SearchSession {
    pub fn new(graph: GraphModel, options: SearchOptions) -> Self {
        Self {
            graph,
            options,
            token: CancellationToken::new(),
        }
    }

    /// Session over the built-in house with default options
    pub fn house() -> Result<Self> {
        Ok(Self::new(house_graph()?, SearchOptions::default()))
    }

    /// Session described by a configuration
    ///
    /// Loads `graph_file` when set, otherwise the built-in house, and applies
    /// the configured heuristic scale and depth bounds.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let graph = match &config.graph_file {
            Some(path) => GraphModel::load(path)?,
            None => house_graph()?,
        };
        let graph = graph.with_heuristic_scale(config.heuristic_scale)?;
        Ok(Self::new(graph, config.search_options()))
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    /// Handle on the token the next search will observe
    ///
    /// Cancelling the handle (from a signal handler, say) stops that search.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Stop the search in flight, or the next one if none is running
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancel any outstanding token and start over with a fresh one
    pub fn reset(&mut self) {
        self.token.cancel();
        self.token = CancellationToken::new();
    }

    /// Validate the request and run `algorithm_key` from `start` to `goal`
    ///
    /// Rejects an unknown algorithm, identical rooms and unknown rooms, in that
    /// order, before any event is emitted. A cancelled run is reported, not
    /// returned as an error; the session then installs a fresh token.
    #[tracing::instrument(skip(self, sink))]
    pub fn run_search(
        &mut self,
        algorithm_key: &str,
        start: &str,
        goal: &str,
        sink: &mut dyn TraceSink,
    ) -> Result<SearchReport> {
        let algorithm: Algorithm = algorithm_key.parse()?;
        if start == goal {
            return Err(RoomsearchError::SameRoom {
                room: start.to_string(),
            });
        }
        for id in [start, goal] {
            if !self.graph.contains(id) {
                return Err(RoomsearchError::RoomNotFound { id: id.to_string() });
            }
        }

        let outcome = algorithm.run(&self.graph, start, goal, &self.options, &self.token, sink);
        if self.token.is_cancelled() {
            tracing::debug!("search cancelled; rotating token");
            self.token = CancellationToken::new();
        }

        let path_length = outcome.path_length();
        Ok(SearchReport {
            algorithm,
            start: start.to_string(),
            goal: goal.to_string(),
            status: outcome.status,
            path: outcome.path,
            path_length,
            cost: path_length,
            expanded: outcome.expanded,
        })
    }
}
