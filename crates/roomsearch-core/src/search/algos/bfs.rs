use std::collections::{HashSet, VecDeque};

use crate::graph::GraphProvider;
use crate::search::algos::shared::{execute, SearchRun, Step, NOT_FOUND, PATH_HIGHLIGHTED};
use crate::search::cancel::CancellationToken;
use crate::search::path::{reconstruct_path, ParentMap};
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome};

/// Breadth-first search over a FIFO queue
///
/// Rooms are marked visited when dequeued and a room's parent is the first room
/// that discovered it, so the reported path has the fewest edges.
#[tracing::instrument(skip(graph, options, token, sink), fields(start = %start, goal = %goal))]
pub fn breadth_first(
    graph: &dyn GraphProvider,
    start: &str,
    goal: &str,
    options: &SearchOptions,
    token: &CancellationToken,
    sink: &mut dyn TraceSink,
) -> SearchOutcome {
    let mut run = SearchRun::new(graph, start, goal, options, token, sink);
    execute(
        &mut run,
        Algorithm::BreadthFirst,
        "Running Breadth-First Search...",
        NOT_FOUND,
        search,
    )
}

fn search(run: &mut SearchRun<'_>) -> Step<Option<Vec<String>>> {
    let graph = run.graph;
    let mut queue: VecDeque<&str> = VecDeque::from([run.start]);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut parents = ParentMap::new();

    loop {
        run.checkpoint()?;
        let Some(current) = queue.pop_front() else {
            return Ok(None);
        };

        if !visited.insert(current) {
            continue;
        }

        run.visiting(current)?;

        if current == run.goal {
            let path = reconstruct_path(run.start, run.goal, &parents);
            return Ok(run.goal_found(path, PATH_HIGHLIGHTED));
        }

        run.visited(current)?;

        for neighbor in graph.neighbors(current) {
            if !visited.contains(neighbor.as_str()) {
                queue.push_back(neighbor);
                parents
                    .entry(neighbor.clone())
                    .or_insert_with(|| current.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::house_graph;
    use crate::search::trace::TraceLog;
    use crate::search::SearchStatus;

    #[test]
    fn test_bfs_study_to_bedroom_five() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        let outcome = breadth_first(
            &graph,
            "SR",
            "BR5",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(outcome.status, SearchStatus::Found);
        assert_eq!(
            outcome.path,
            vec!["SR", "CR1", "LR", "STAIRCASE", "SFLR", "BR1", "BR3", "BR5"]
        );
        assert_eq!(outcome.path_length(), 7);
        assert_eq!(log.path_steps(), outcome.path);
    }

    #[test]
    fn test_bfs_expands_level_by_level() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        let outcome = breadth_first(
            &graph,
            "SR",
            "BR5",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(
            log.visiting_order(),
            vec![
                "SR",
                "CR1",
                "LR",
                "CB",
                "DR",
                "STAIRCASE",
                "K",
                "SFLR",
                "G",
                "MB",
                "BR1",
                "BR2",
                "STR",
                "MBR",
                "BR3",
                "BR4",
                "BR5"
            ]
        );
        assert_eq!(outcome.expanded, 17);
    }

    #[test]
    fn test_bfs_goal_gets_visiting_then_found() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        breadth_first(
            &graph,
            "CR1",
            "CB",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        let kinds: Vec<_> = log.events().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                "status", "visiting", "visited", "visiting", "visited", "visiting", "found",
                "path", "path", "status"
            ]
        );
    }
}
