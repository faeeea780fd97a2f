use crate::graph::GraphProvider;
use crate::search::algos::depth_limited::limited_search;
use crate::search::algos::shared::{execute, SearchRun, Step, NOT_FOUND};
use crate::search::cancel::CancellationToken;
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome};

/// Depth-limited passes with limits 0, 1, 2, … up to `options.max_depth`
#[tracing::instrument(skip(graph, options, token, sink), fields(start = %start, goal = %goal, max_depth = options.max_depth))]
pub fn iterative_deepening(
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
        Algorithm::IterativeDeepening,
        "Running Iterative Deepening Search...",
        NOT_FOUND,
        search,
    )
}

fn search(run: &mut SearchRun<'_>) -> Step<Option<Vec<String>>> {
    for depth in 0..=run.options.max_depth {
        run.checkpoint()?;
        run.status(
            &format!("Iterative Deepening - Depth {depth}..."),
            &format!("Current depth limit: {depth}"),
        );
        tracing::trace!(depth, "deepening");

        if let Some(path) = limited_search(run, depth)? {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::house_graph;
    use crate::search::trace::{TraceEvent, TraceLog};
    use crate::search::SearchStatus;

    #[test]
    fn test_deepens_until_goal_depth() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        let outcome = iterative_deepening(
            &graph,
            "SR",
            "LR",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(outcome.status, SearchStatus::Found);
        assert_eq!(outcome.path, vec!["SR", "CR1", "LR"]);
        assert_eq!(
            log.visiting_order(),
            vec!["SR", "SR", "CR1", "SR", "CR1", "LR"]
        );

        let depth_statuses = log
            .events()
            .iter()
            .filter(|e| {
                matches!(e, TraceEvent::Status { message, .. } if message.starts_with("Iterative Deepening - Depth"))
            })
            .count();
        assert_eq!(depth_statuses, 3);
    }

    #[test]
    fn test_finds_shortest_path_to_far_room() {
        let graph = house_graph().unwrap();
        let outcome = iterative_deepening(
            &graph,
            "SR",
            "BR5",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut TraceLog::new(),
        );
        assert_eq!(
            outcome.path,
            vec!["SR", "CR1", "LR", "STAIRCASE", "SFLR", "BR1", "BR3", "BR5"]
        );
    }

    #[test]
    fn test_depth_cap_reports_not_found() {
        let graph = house_graph().unwrap();
        let options = SearchOptions {
            max_depth: 6,
            ..Default::default()
        };
        let mut log = TraceLog::new();
        let outcome = iterative_deepening(
            &graph,
            "SR",
            "BR5",
            &options,
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(outcome.status, SearchStatus::NotFound);
        assert!(matches!(
            log.events().last(),
            Some(TraceEvent::Status { message, .. }) if message == NOT_FOUND
        ));
    }
}
