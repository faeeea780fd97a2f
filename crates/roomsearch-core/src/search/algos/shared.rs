//! Per-run state shared by every search strategy

use crate::graph::GraphProvider;
use crate::search::cancel::CancellationToken;
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome, SearchStatus};

/// Marker returned up the stack once the run's token is cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cancelled;

pub(crate) type Step<T> = Result<T, Cancelled>;

/// State of a single search invocation
///
/// Owns nothing beyond the call: the graph, token and sink are borrowed from the
/// caller, and the strategy keeps its own frontier and visited set.
pub(crate) struct SearchRun<'a> {
    pub graph: &'a dyn GraphProvider,
    pub start: &'a str,
    pub goal: &'a str,
    pub options: &'a SearchOptions,
    token: &'a CancellationToken,
    sink: &'a mut dyn TraceSink,
    expanded: usize,
}

impl<'a> SearchRun<'a> {
    pub fn new(
        graph: &'a dyn GraphProvider,
        start: &'a str,
        goal: &'a str,
        options: &'a SearchOptions,
        token: &'a CancellationToken,
        sink: &'a mut dyn TraceSink,
    ) -> Self {
        Self {
            graph,
            start,
            goal,
            options,
            token,
            sink,
            expanded: 0,
        }
    }

    pub fn checkpoint(&self) -> Step<()> {
        if self.token.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Announce an expansion; the sink call is a suspension point, so the
    /// token is checked on both sides of it
    pub fn visiting(&mut self, room: &str) -> Step<()> {
        self.checkpoint()?;
        self.expanded += 1;
        self.sink.on_visiting(room);
        self.checkpoint()
    }

    pub fn visited(&mut self, room: &str) -> Step<()> {
        self.checkpoint()?;
        self.sink.on_visited(room);
        Ok(())
    }

    pub fn status(&mut self, message: &str, detail: &str) {
        self.sink.on_status(message, detail);
    }

    /// Emit `found` for `room` followed by one path step per room of `path`
    pub fn found(&mut self, room: &str, path: &[String]) {
        self.sink.on_found(room);
        for step in path {
            self.sink.on_path_step(step);
        }
    }

    /// Report the goal with the generic success status
    pub fn goal_found(&mut self, path: Vec<String>, detail: &str) -> Option<Vec<String>> {
        let goal = self.goal;
        self.found(goal, &path);
        self.status("Goal found!", detail);
        Some(path)
    }
}

/// Run `body` as `algorithm`, wrapping it in the start/stop status messages
pub(crate) fn execute(
    run: &mut SearchRun<'_>,
    algorithm: Algorithm,
    running: &str,
    not_found: &str,
    body: impl FnOnce(&mut SearchRun<'_>) -> Step<Option<Vec<String>>>,
) -> SearchOutcome {
    run.status(running, algorithm.description());

    let result = match run.checkpoint() {
        Ok(()) => body(run),
        Err(cancelled) => Err(cancelled),
    };
    let (status, path) = match result {
        Ok(Some(path)) => (SearchStatus::Found, path),
        Ok(None) => {
            run.status(not_found, "");
            (SearchStatus::NotFound, Vec::new())
        }
        Err(Cancelled) => {
            run.status("Search stopped", "");
            (SearchStatus::Cancelled, Vec::new())
        }
    };

    tracing::debug!(
        algorithm = algorithm.key(),
        start = run.start,
        goal = run.goal,
        status = ?status,
        expanded = run.expanded,
        path_length = path.len().saturating_sub(1),
        "search finished"
    );

    SearchOutcome {
        status,
        path,
        expanded: run.expanded,
    }
}

/// Status line used when the frontier empties
pub(crate) const NOT_FOUND: &str = "Search completed - Goal not found";

/// Default success detail for parent-map searches
pub(crate) const PATH_HIGHLIGHTED: &str = "Path highlighted in green";
