use crate::graph::GraphProvider;
use crate::search::algos::best_first::best_first_search;
use crate::search::algos::shared::{execute, SearchRun, NOT_FOUND};
use crate::search::cancel::CancellationToken;
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome};

/// A* search ordered by `cost so far + heuristic(room, goal)`
#[tracing::instrument(skip(graph, options, token, sink), fields(start = %start, goal = %goal))]
pub fn astar(
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
        Algorithm::AStar,
        "Running A* Search...",
        NOT_FOUND,
        |run| {
            best_first_search(
                run,
                |graph, room, cost| cost as f64 + graph.heuristic(room, goal),
                |entry| format!("Cost: {}, Steps: {}", entry.cost, entry.steps()),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::house_graph;
    use crate::search::trace::{TraceEvent, TraceLog};
    use crate::search::SearchStatus;

    #[test]
    fn test_astar_study_to_bedroom_five() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        let outcome = astar(
            &graph,
            "SR",
            "BR5",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(outcome.status, SearchStatus::Found);
        assert_eq!(outcome.path_length(), 7);
        assert!(log.events().contains(&TraceEvent::Status {
            message: "Goal found!".to_string(),
            detail: "Cost: 7, Steps: 7".to_string(),
        }));
    }

    #[test]
    fn test_astar_skips_rooms_leading_away_from_goal() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        astar(
            &graph,
            "LR",
            "BR1",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        let visited = log.visiting_order();
        assert_eq!(visited.first(), Some(&"LR"));
        assert_eq!(visited.last(), Some(&"BR1"));
        // The garage wing lies in the opposite direction
        assert!(!visited.contains(&"G"));
        assert!(!visited.contains(&"STR"));
    }
}
