use crate::graph::GraphProvider;
use crate::search::algos::best_first::best_first_search;
use crate::search::algos::shared::{execute, SearchRun, NOT_FOUND};
use crate::search::cancel::CancellationToken;
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome};

/// Uniform-cost search: always expands the cheapest path found so far
#[tracing::instrument(skip(graph, options, token, sink), fields(start = %start, goal = %goal))]
pub fn uniform_cost(
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
        Algorithm::UniformCost,
        "Running Uniform Cost Search...",
        NOT_FOUND,
        |run| {
            best_first_search(
                run,
                |_, _, cost| cost as f64,
                |entry| format!("Cost: {}", entry.cost),
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
    fn test_ucs_matches_bfs_length() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        let outcome = uniform_cost(
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
            detail: "Cost: 7".to_string(),
        }));
    }

    #[test]
    fn test_ucs_equal_costs_expand_in_insertion_order() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        uniform_cost(
            &graph,
            "LR",
            "MB",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        // Same order as breadth-first: every edge costs the same
        assert_eq!(
            log.visiting_order(),
            vec!["LR", "DR", "CR1", "STAIRCASE", "K", "CB", "SR", "SFLR", "G", "MB"]
        );
    }
}
