//! Path reconstruction from parent maps

use std::collections::HashMap;

/// Maps a room to the room it was discovered from
pub type ParentMap = HashMap<String, String>;

/// Walk back from `goal` to `start` through `parents`
///
/// Returns the rooms in start-to-goal order. If the chain breaks before reaching
/// `start` the partial tail (ending at `goal`) is returned and the break is logged;
/// correct bookkeeping never produces one.
pub fn reconstruct_path(start: &str, goal: &str, parents: &ParentMap) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;

    while current != start {
        // A chain longer than the map has a cycle
        if path.len() > parents.len() + 1 {
            tracing::warn!(start, goal, "parent chain contains a cycle");
            break;
        }
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => {
                tracing::warn!(start, goal, room = current, "parent chain is broken");
                break;
            }
        }
    }

    path.reverse();
    path
}

/// Join the two halves of a bidirectional search at `meeting`
///
/// The front half runs start → meeting through `front_parents`, the back half
/// meeting → goal through `back_parents`. The meeting room appears once.
pub fn merge_bidirectional(
    start: &str,
    goal: &str,
    meeting: &str,
    front_parents: &ParentMap,
    back_parents: &ParentMap,
) -> Vec<String> {
    let mut path = reconstruct_path(start, meeting, front_parents);
    let mut back = reconstruct_path(goal, meeting, back_parents);
    back.reverse();
    path.extend(back.into_iter().skip(1));
    path
}
