//! Small graphs for unit tests

use std::collections::HashMap;

use crate::graph::model::GraphModel;
use crate::graph::types::Room;

const ROWS: [&str; 3] = ["A", "B", "C"];

/// A 3x3 grid with 50-unit spacing, so the heuristic equals the Manhattan step count
///
/// Rooms are `A1`..`C3` (row letter, column digit). Neighbors are listed
/// up, left, right, down.
pub(crate) fn grid_graph() -> GraphModel {
    let id = |row: usize, col: usize| format!("{}{}", ROWS[row], col + 1);

    let mut rooms = Vec::new();
    let mut adjacency = HashMap::new();
    for row in 0..3 {
        for col in 0..3 {
            let room_id = id(row, col);
            rooms.push(Room::new(
                &room_id,
                &room_id,
                1.0,
                col as f64 * 50.0,
                row as f64 * 50.0,
            ));

            let mut neighbors = Vec::new();
            if row > 0 {
                neighbors.push(id(row - 1, col));
            }
            if col > 0 {
                neighbors.push(id(row, col - 1));
            }
            if col < 2 {
                neighbors.push(id(row, col + 1));
            }
            if row < 2 {
                neighbors.push(id(row + 1, col));
            }
            adjacency.insert(room_id, neighbors);
        }
    }

    GraphModel::from_tables(rooms, adjacency).unwrap()
}

/// Two disconnected pairs: `A`-`B` and `C`-`D`
pub(crate) fn split_graph() -> GraphModel {
    let rooms = vec![
        Room::new("A", "A", 1.0, 0.0, 0.0),
        Room::new("B", "B", 1.0, 50.0, 0.0),
        Room::new("C", "C", 1.0, 0.0, 100.0),
        Room::new("D", "D", 1.0, 50.0, 100.0),
    ];
    let adjacency = [("A", "B"), ("B", "A"), ("C", "D"), ("D", "C")]
        .into_iter()
        .map(|(from, to)| (from.to_string(), vec![to.to_string()]))
        .collect();
    GraphModel::from_tables(rooms, adjacency).unwrap()
}

/// Triangle `S`-`A`-`N` with a tail `N`-`G`
///
/// The shortest route is `S N G`, but a depth-first pass that enters `N`
/// through `A` first reaches `G` one edge later. Every room sits at the origin,
/// so the heuristic is zero everywhere.
pub(crate) fn shortcut_graph() -> GraphModel {
    let rooms = ["S", "A", "N", "G"]
        .into_iter()
        .map(|id| Room::new(id, id, 1.0, 0.0, 0.0))
        .collect();
    let adjacency = [
        ("S", vec!["A", "N"]),
        ("A", vec!["S", "N"]),
        ("N", vec!["A", "S", "G"]),
        ("G", vec!["N"]),
    ]
    .into_iter()
    .map(|(id, neighbors)| {
        (
            id.to_string(),
            neighbors.into_iter().map(str::to_string).collect(),
        )
    })
    .collect();
    GraphModel::from_tables(rooms, adjacency).unwrap()
}
