use std::collections::HashSet;

use crate::graph::GraphProvider;
use crate::search::algos::shared::{execute, SearchRun, Step, NOT_FOUND, PATH_HIGHLIGHTED};
use crate::search::cancel::CancellationToken;
use crate::search::path::{reconstruct_path, ParentMap};
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome};

/// Depth-first search over an explicit stack
///
/// Neighbors are pushed in reverse adjacency order so they pop in adjacency
/// order. This is a tie-break: it decides which of several valid paths is found.
#[tracing::instrument(skip(graph, options, token, sink), fields(start = %start, goal = %goal))]
pub fn depth_first(
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
        Algorithm::DepthFirst,
        "Running Depth-First Search...",
        NOT_FOUND,
        search,
    )
}

fn search(run: &mut SearchRun<'_>) -> Step<Option<Vec<String>>> {
    let graph = run.graph;
    let mut stack: Vec<&str> = vec![run.start];
    let mut visited: HashSet<&str> = HashSet::new();
    let mut parents = ParentMap::new();

    loop {
        run.checkpoint()?;
        let Some(current) = stack.pop() else {
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

        for neighbor in graph.neighbors(current).iter().rev() {
            if !visited.contains(neighbor.as_str()) {
                stack.push(neighbor);
                parents
                    .entry(neighbor.clone())
                    .or_insert_with(|| current.to_string());
            }
        }
    }
}
