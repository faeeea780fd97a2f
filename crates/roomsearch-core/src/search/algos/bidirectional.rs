use std::collections::{HashSet, VecDeque};

use crate::graph::GraphProvider;
use crate::search::algos::shared::{execute, SearchRun, Step, NOT_FOUND};
use crate::search::cancel::CancellationToken;
use crate::search::path::{merge_bidirectional, ParentMap};
use crate::search::trace::TraceSink;
use crate::search::{Algorithm, SearchOptions, SearchOutcome};

/// Two breadth-first searches, one from each end, advanced one step each per round
///
/// The search stops at the first popped room that the other side has already
/// discovered. The merged path is not guaranteed to be the shortest.
#[tracing::instrument(skip(graph, options, token, sink), fields(start = %start, goal = %goal))]
pub fn bidirectional(
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
        Algorithm::Bidirectional,
        "Running Bidirectional Search...",
        NOT_FOUND,
        search,
    )
}

/// One direction of the search
struct Side<'g> {
    queue: VecDeque<&'g str>,
    discovered: HashSet<&'g str>,
    parents: ParentMap,
}

impl<'g> Side<'g> {
    fn new(origin: &'g str) -> Self {
        Self {
            queue: VecDeque::from([origin]),
            discovered: HashSet::from([origin]),
            parents: ParentMap::new(),
        }
    }

    /// Pop and expand one room; returns it if the other side has already discovered it
    fn step(&mut self, run: &mut SearchRun<'g>, other: &Side<'g>) -> Step<Option<&'g str>> {
        let Some(current) = self.queue.pop_front() else {
            return Ok(None);
        };

        run.visiting(current)?;

        if other.discovered.contains(current) {
            return Ok(Some(current));
        }

        run.visited(current)?;

        let graph = run.graph;
        for neighbor in graph.neighbors(current) {
            if self.discovered.insert(neighbor.as_str()) {
                self.parents.insert(neighbor.clone(), current.to_string());
                self.queue.push_back(neighbor.as_str());
            }
        }
        Ok(None)
    }
}

fn search(run: &mut SearchRun<'_>) -> Step<Option<Vec<String>>> {
    let mut front = Side::new(run.start);
    let mut back = Side::new(run.goal);

    while !(front.queue.is_empty() && back.queue.is_empty()) {
        run.checkpoint()?;

        let meeting = match front.step(run, &back)? {
            Some(room) => Some(room),
            None => back.step(run, &front)?,
        };

        if let Some(meeting) = meeting {
            let path = merge_bidirectional(
                run.start,
                run.goal,
                meeting,
                &front.parents,
                &back.parents,
            );
            tracing::debug!(meeting, "frontiers met");
            run.found(meeting, &path);
            run.status(
                "Goal found! Paths met in the middle",
                "Meeting point highlighted",
            );
            return Ok(Some(path));
        }
    }

    Ok(None)
}
