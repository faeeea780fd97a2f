use crate::graph::GraphProvider;
use crate::search::algos::best_first::best_first_search;
use crate::search::algos::shared::{execute, SearchRun, NOT_FOUND};
use crate::search::cancel::CancellationToken;
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome};

/// Greedy best-first search ordered by `heuristic(room, goal)` alone
#[tracing::instrument(skip(graph, options, token, sink), fields(start = %start, goal = %goal))]
pub fn greedy(
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
        Algorithm::Greedy,
        "Running Greedy Best-First Search...",
        NOT_FOUND,
        |run| {
            best_first_search(
                run,
                |graph, room, _| graph.heuristic(room, goal),
                |entry| format!("Steps: {}", entry.steps()),
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
    fn test_greedy_follows_the_heuristic() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        let outcome = greedy(
            &graph,
            "K",
            "BR6",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(outcome.status, SearchStatus::Found);
        assert_eq!(
            outcome.path,
            vec!["K", "DR", "LR", "STAIRCASE", "SFLR", "BR2", "BR4", "BR6"]
        );
        // The garage wing scores better than the living room, so it is a dead end
        // greedy explores before heading for the stairs
        assert_eq!(
            log.visiting_order(),
            vec!["K", "DR", "G", "STR", "LR", "STAIRCASE", "SFLR", "BR2", "BR4", "BR6"]
        );
        assert!(log.events().contains(&TraceEvent::Status {
            message: "Goal found!".to_string(),
            detail: "Steps: 7".to_string(),
        }));
    }
}
