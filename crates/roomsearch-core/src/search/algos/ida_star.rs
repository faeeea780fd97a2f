use std::collections::HashSet;

use crate::graph::GraphProvider;
use crate::search::algos::shared::{execute, SearchRun, Step, NOT_FOUND};
use crate::search::cancel::CancellationToken;
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome};

/// Iterative-deepening A*: depth-first passes bounded by an f-score threshold
///
/// Each pass raises the threshold to the smallest f-score that exceeded the
/// previous one. A pass that finds no finite excess means the goal is
/// unreachable.
#[tracing::instrument(skip(graph, options, token, sink), fields(start = %start, goal = %goal))]
pub fn ida_star(
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
        Algorithm::IdaStar,
        "Running IDA* Search...",
        NOT_FOUND,
        search,
    )
}

/// Result of one bounded pass below a room
enum Bound {
    Found(Vec<String>),
    /// Smallest f-score beyond the threshold; infinite when nothing was cut off
    Exceeded(f64),
}

fn search(run: &mut SearchRun<'_>) -> Step<Option<Vec<String>>> {
    let mut threshold = run.graph.heuristic(run.start, run.goal);

    loop {
        run.checkpoint()?;
        run.status(
            &format!("IDA* - Threshold: {:.1}...", threshold),
            &format!("Current f-cost limit: {:.1}", threshold),
        );

        let mut pass = ThresholdPass {
            threshold,
            visited: HashSet::new(),
            path: vec![run.start.to_string()],
        };
        let start = run.start;
        match pass.descend(run, start, 0)? {
            Bound::Found(path) => {
                let detail = format!("Final threshold: {:.1}", threshold);
                return Ok(run.goal_found(path, &detail));
            }
            Bound::Exceeded(next) if next.is_finite() => {
                tracing::trace!(threshold, next, "raising threshold");
                threshold = next;
            }
            Bound::Exceeded(_) => return Ok(None),
        }
    }
}

/// One depth-first pass under a fixed threshold
///
/// A room is on the visited set only while it is on the current path, so other
/// routes may pass through it after the recursion backs out.
struct ThresholdPass<'g> {
    threshold: f64,
    visited: HashSet<&'g str>,
    path: Vec<String>,
}

impl<'g> ThresholdPass<'g> {
    fn descend(&mut self, run: &mut SearchRun<'g>, room: &'g str, cost: usize) -> Step<Bound> {
        run.checkpoint()?;

        let f = cost as f64 + run.graph.heuristic(room, run.goal);
        if f > self.threshold {
            return Ok(Bound::Exceeded(f));
        }
        if room == run.goal {
            return Ok(Bound::Found(self.path.clone()));
        }

        self.visited.insert(room);
        run.visiting(room)?;

        let mut min = f64::INFINITY;
        let graph = run.graph;
        for neighbor in graph.neighbors(room) {
            if self.visited.contains(neighbor.as_str()) {
                continue;
            }
            self.path.push(neighbor.clone());
            let bound = self.descend(run, neighbor, cost + 1)?;
            self.path.pop();

            match bound {
                Bound::Found(path) => return Ok(Bound::Found(path)),
                Bound::Exceeded(excess) => min = min.min(excess),
            }
        }

        run.visited(room)?;
        self.visited.remove(room);
        Ok(Bound::Exceeded(min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::{grid_graph, split_graph};
    use crate::graph::house_graph;
    use crate::search::trace::{TraceEvent, TraceLog};
    use crate::search::SearchStatus;

    fn status_messages(log: &TraceLog) -> Vec<&str> {
        log.events()
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Status { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_first_threshold_suffices_on_grid() {
        let graph = grid_graph();
        let mut log = TraceLog::new();
        let outcome = ida_star(
            &graph,
            "A1",
            "C3",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(outcome.status, SearchStatus::Found);
        assert_eq!(outcome.path, vec!["A1", "A2", "A3", "B3", "C3"]);
        // The goal itself is reported as found, never as visiting
        assert_eq!(log.visiting_order(), vec!["A1", "A2", "A3", "B3"]);
        assert_eq!(
            status_messages(&log),
            vec!["Running IDA* Search...", "IDA* - Threshold: 4.0...", "Goal found!"]
        );
        assert!(log.events().contains(&TraceEvent::Status {
            message: "Goal found!".to_string(),
            detail: "Final threshold: 4.0".to_string(),
        }));
    }

    #[test]
    fn test_house_needs_several_thresholds() {
        let graph = house_graph().unwrap();
        let mut log = TraceLog::new();
        let outcome = ida_star(
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
        let thresholds = status_messages(&log)
            .into_iter()
            .filter(|message| message.starts_with("IDA* - Threshold:"))
            .count();
        assert!(thresholds > 1);
        assert_eq!(status_messages(&log)[1], "IDA* - Threshold: 13.6...");
    }

    #[test]
    fn test_unreachable_goal_has_no_solution() {
        let graph = split_graph();
        let mut log = TraceLog::new();
        let outcome = ida_star(
            &graph,
            "A",
            "D",
            &SearchOptions::default(),
            &CancellationToken::new(),
            &mut log,
        );

        assert_eq!(outcome.status, SearchStatus::NotFound);
        assert_eq!(log.visiting_order(), vec!["A", "B"]);
        assert_eq!(
            log.events().last(),
            Some(&TraceEvent::Status {
                message: NOT_FOUND.to_string(),
                detail: String::new(),
            })
        );
    }
}
