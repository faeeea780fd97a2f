//! Priority-ordered search shared by uniform-cost, A* and greedy best-first

use std::collections::HashSet;

use crate::graph::GraphProvider;
use crate::search::algos::shared::{SearchRun, Step};
use crate::search::frontier::PriorityFrontier;

/// Frontier entry carrying the whole path from the start room
#[derive(Debug, Clone)]
pub(crate) struct PathEntry {
    /// Edges walked so far (every edge costs 1)
    pub cost: usize,
    pub path: Vec<String>,
}

impl PathEntry {
    pub fn room(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Expand the lowest-priority entry until the goal is popped
///
/// `priority(graph, room, cost)` scores an entry. Rooms are settled when popped;
/// entries for an already settled room are dropped. `detail` renders the success
/// status from the goal entry.
pub(crate) fn best_first_search(
    run: &mut SearchRun<'_>,
    priority: impl Fn(&dyn GraphProvider, &str, usize) -> f64,
    detail: impl Fn(&PathEntry) -> String,
) -> Step<Option<Vec<String>>> {
    let graph = run.graph;
    let goal = run.goal;
    let mut frontier = PriorityFrontier::new();
    let mut visited: HashSet<String> = HashSet::new();

    frontier.push(
        priority(graph, run.start, 0),
        PathEntry {
            cost: 0,
            path: vec![run.start.to_string()],
        },
    );

    loop {
        run.checkpoint()?;
        let Some((score, entry)) = frontier.pop() else {
            return Ok(None);
        };

        let current = entry.room().to_string();
        if !visited.insert(current.clone()) {
            continue;
        }

        run.visiting(&current)?;
        tracing::trace!(room = %current, score, cost = entry.cost, "expanding");

        if current == goal {
            let message = detail(&entry);
            return Ok(run.goal_found(entry.path, &message));
        }

        run.visited(&current)?;

        for neighbor in graph.neighbors(&current) {
            if visited.contains(neighbor) {
                continue;
            }
            let cost = entry.cost + 1;
            let mut path = entry.path.clone();
            path.push(neighbor.clone());
            frontier.push(priority(graph, neighbor, cost), PathEntry { cost, path });
        }
    }
}
