use std::collections::HashSet;

use crate::graph::GraphProvider;
use crate::search::algos::shared::{execute, SearchRun, Step, PATH_HIGHLIGHTED};
use crate::search::cancel::CancellationToken;
use crate::search::path::{reconstruct_path, ParentMap};
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome};

/// Recursive depth-first search that stops descending past `options.depth_limit`
#[tracing::instrument(skip(graph, options, token, sink), fields(start = %start, goal = %goal, limit = options.depth_limit))]
pub fn depth_limited(
    graph: &dyn GraphProvider,
    start: &str,
    goal: &str,
    options: &SearchOptions,
    token: &CancellationToken,
    sink: &mut dyn TraceSink,
) -> SearchOutcome {
    let mut run = SearchRun::new(graph, start, goal, options, token, sink);
    let running = format!(
        "Running Depth-Limited Search (limit: {})...",
        options.depth_limit
    );
    let limit = options.depth_limit;
    execute(
        &mut run,
        Algorithm::DepthLimited,
        &running,
        "Search completed - Goal not found within depth limit",
        |run| limited_search(run, limit),
    )
}

/// One bounded pass from the run's start room with a fresh visited set
///
/// Rooms stay in the visited set after the recursion backs out of them, so a
/// room reached first by a long route is not re-entered by a shorter one within
/// the same pass.
pub(crate) fn limited_search(run: &mut SearchRun<'_>, limit: usize) -> Step<Option<Vec<String>>> {
    let mut pass = LimitedPass {
        limit,
        visited: HashSet::new(),
        parents: ParentMap::new(),
    };
    let start = run.start;
    pass.descend(run, start, 0)
}

struct LimitedPass<'g> {
    limit: usize,
    visited: HashSet<&'g str>,
    parents: ParentMap,
}

impl<'g> LimitedPass<'g> {
    fn descend(
        &mut self,
        run: &mut SearchRun<'g>,
        room: &'g str,
        depth: usize,
    ) -> Step<Option<Vec<String>>> {
        run.checkpoint()?;
        if depth > self.limit {
            return Ok(None);
        }

        self.visited.insert(room);
        run.visiting(room)?;

        if room == run.goal {
            let path = reconstruct_path(run.start, run.goal, &self.parents);
            return Ok(run.goal_found(path, PATH_HIGHLIGHTED));
        }

        run.visited(room)?;

        let graph = run.graph;
        for neighbor in graph.neighbors(room) {
            if !self.visited.contains(neighbor.as_str()) {
                self.parents.insert(neighbor.clone(), room.to_string());
                if let Some(path) = self.descend(run, neighbor, depth + 1)? {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::house_graph;
    use crate::search::trace::{TraceEvent, TraceLog};
    use crate::search::SearchStatus;

    fn options(limit: usize) -> SearchOptions {
        SearchOptions {
            depth_limit: limit,
            ..Default::default()
        }
    }

    #[test]
    fn test_limit_one_cannot_reach_bedroom_five() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        let outcome = depth_limited(
            &graph,
            "SR",
            "BR5",
            &options(1),
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(outcome.status, SearchStatus::NotFound);
        assert_eq!(log.visiting_order(), vec!["SR", "CR1"]);
        assert_eq!(
            log.events().last(),
            Some(&TraceEvent::Status {
                message: "Search completed - Goal not found within depth limit".to_string(),
                detail: String::new(),
            })
        );
    }

    #[test]
    fn test_goal_within_limit_is_found() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        let outcome = depth_limited(
            &graph,
            "SR",
            "LR",
            &options(2),
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(outcome.status, SearchStatus::Found);
        assert_eq!(outcome.path, vec!["SR", "CR1", "LR"]);
        assert_eq!(log.visiting_order(), vec!["SR", "CR1", "LR"]);
    }

    #[test]
    fn test_goal_exactly_at_limit_is_found() {
        let graph = house_graph().unwrap();
        let outcome = depth_limited(
            &graph,
            "SR",
            "BR5",
            &options(7),
            &CancellationToken::new(),
            &mut TraceLog::new(),
        );
        assert_eq!(outcome.path_length(), 7);
    }

    #[test]
    fn test_default_limit_announced_in_status() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        depth_limited(
            &graph,
            "LR",
            "DR",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );
        assert!(matches!(
            &log.events()[0],
            TraceEvent::Status { message, .. } if message == "Running Depth-Limited Search (limit: 3)..."
        ));
    }
}
