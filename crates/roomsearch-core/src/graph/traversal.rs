use crate::graph::types::Room;

/// Trait for providing graph adjacency, room metadata and heuristic distance
///
/// Every search strategy reads the graph through this trait only.
pub trait GraphProvider {
    /// Neighbors of `id` in expansion order; empty for an unknown id
    fn neighbors(&self, id: &str) -> &[String];

    /// Estimated remaining cost from `from` to `to`
    fn heuristic(&self, from: &str, to: &str) -> f64;

    fn room(&self, id: &str) -> Option<&Room>;

    fn contains(&self, id: &str) -> bool {
        self.room(id).is_some()
    }
}
