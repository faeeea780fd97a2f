//! Search engine
//!
//! Nine classical strategies share one entry-point signature (`SearchFn`) and
//! report their progress through a `TraceSink`. Runs are cooperative: every
//! expansion re-checks the caller's `CancellationToken`.

pub mod algos;
pub mod cancel;
pub mod frontier;
pub mod path;
pub mod trace;


use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::RoomsearchError;
use crate::graph::GraphProvider;

pub use cancel::CancellationToken;
pub use path::{merge_bidirectional, reconstruct_path, ParentMap};
pub use trace::{NullSink, TraceEvent, TraceLog, TraceSink};

/// Tunables shared by the depth-bounded strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Depth bound for depth-limited search
    pub depth_limit: usize,
    /// Largest limit tried by iterative-deepening search
    pub max_depth: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth_limit: 3,
            max_depth: 10,
        }
    }
}

/// How a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Found,
    NotFound,
    Cancelled,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Found => write!(f, "found"),
            SearchStatus::NotFound => write!(f, "not_found"),
            SearchStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of a single search run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    /// Rooms from start to goal; empty unless `status` is `Found`
    pub path: Vec<String>,
    /// Number of `visiting` events emitted
    pub expanded: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Path length in edges
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Uniform signature of every strategy
pub type SearchFn = fn(
    &dyn GraphProvider,
    &str,
    &str,
    &SearchOptions,
    &CancellationToken,
    &mut dyn TraceSink,
) -> SearchOutcome;

/// The nine supported strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    DepthLimited,
    IterativeDeepening,
    UniformCost,
    Bidirectional,
    AStar,
    Greedy,
    IdaStar,
}

impl Algorithm {
    /// Every strategy, in registry order
    pub const ALL: [Algorithm; 9] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::DepthLimited,
        Algorithm::IterativeDeepening,
        Algorithm::UniformCost,
        Algorithm::Bidirectional,
        Algorithm::AStar,
        Algorithm::Greedy,
        Algorithm::IdaStar,
    ];

    /// Registry key
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "breadth-first",
            Algorithm::DepthFirst => "depth-first",
            Algorithm::DepthLimited => "depth-limited",
            Algorithm::IterativeDeepening => "iterative-deepening",
            Algorithm::UniformCost => "uniform-cost",
            Algorithm::Bidirectional => "bidirectional",
            Algorithm::AStar => "astar",
            Algorithm::Greedy => "greedy",
            Algorithm::IdaStar => "ida-star",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "Breadth-First Search",
            Algorithm::DepthFirst => "Depth-First Search",
            Algorithm::DepthLimited => "Depth-Limited Search",
            Algorithm::IterativeDeepening => "Iterative Deepening Search",
            Algorithm::UniformCost => "Uniform Cost Search",
            Algorithm::Bidirectional => "Bidirectional Search",
            Algorithm::AStar => "A* Search",
            Algorithm::Greedy => "Greedy Best-First Search",
            Algorithm::IdaStar => "IDA* Search",
        }
    }

    /// One-line summary, also used as the detail of the opening status
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "Explores nodes level by level",
            Algorithm::DepthFirst => "Explores as far as possible along each branch",
            Algorithm::DepthLimited => "DFS with depth limit",
            Algorithm::IterativeDeepening => "Combines DFS with BFS benefits",
            Algorithm::UniformCost => "Explores lowest cost path first",
            Algorithm::Bidirectional => "Searches from both start and goal",
            Algorithm::AStar => "Uses heuristic to guide search optimally",
            Algorithm::Greedy => "Always chooses the node closest to goal",
            Algorithm::IdaStar => "Memory-efficient A* with iterative deepening",
        }
    }

    pub fn entry_point(self) -> SearchFn {
        match self {
            Algorithm::BreadthFirst => algos::breadth_first,
            Algorithm::DepthFirst => algos::depth_first,
            Algorithm::DepthLimited => algos::depth_limited,
            Algorithm::IterativeDeepening => algos::iterative_deepening,
            Algorithm::UniformCost => algos::uniform_cost,
            Algorithm::Bidirectional => algos::bidirectional,
            Algorithm::AStar => algos::astar,
            Algorithm::Greedy => algos::greedy,
            Algorithm::IdaStar => algos::ida_star,
        }
    }

    /// Run this strategy from `start` to `goal`
    ///
    /// Both rooms are expected to exist and differ; `SearchSession` checks
    /// that before dispatching.
    pub fn run(
        self,
        graph: &dyn GraphProvider,
        start: &str,
        goal: &str,
        options: &SearchOptions,
        token: &CancellationToken,
        sink: &mut dyn TraceSink,
    ) -> SearchOutcome {
        (self.entry_point())(graph, start, goal, options, token, sink)
    }

    /// Comma-separated registry keys
    pub fn supported_keys() -> String {
        Self::ALL
            .iter()
            .map(|algorithm| algorithm.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Algorithm {
    type Err = RoomsearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.key() == key)
            .ok_or_else(|| RoomsearchError::UnknownAlgorithm {
                key: s.to_string(),
                supported: Self::supported_keys(),
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Registry of `(key, entry point)` pairs in display order
pub fn registry() -> impl Iterator<Item = (&'static str, SearchFn)> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| (algorithm.key(), algorithm.entry_point()))
}
