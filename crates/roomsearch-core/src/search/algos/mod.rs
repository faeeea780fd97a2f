//! Search strategy implementations
//!
//! Every strategy has the same entry-point signature (`SearchFn`):
//! - `bfs`, `dfs`: parent-map searches over a queue or stack
//! - `depth_limited`, `iterative_deepening`: bounded recursive depth-first passes
//! - `uniform_cost`, `astar`, `greedy`: priority-ordered, path-carrying searches
//! - `bidirectional`: two breadth-first fronts that meet in the middle
//! - `ida_star`: depth-first passes bounded by an f-score threshold
//! - `shared`: per-run state, cancellation checks and status reporting

pub mod astar;
mod best_first;
pub mod bfs;
pub mod bidirectional;
pub mod depth_limited;
pub mod dfs;
pub mod greedy;
pub mod ida_star;
pub mod iterative_deepening;
mod shared;
pub mod uniform_cost;

pub use astar::astar;
pub use bfs::breadth_first;
pub use bidirectional::bidirectional;
pub use depth_limited::depth_limited;
pub use dfs::depth_first;
pub use greedy::greedy;
pub use ida_star::ida_star;
pub use iterative_deepening::iterative_deepening;
pub use uniform_cost::uniform_cost;
