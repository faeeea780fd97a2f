use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A room in the house graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Floor number; the staircase sits between floors at 1.5
    pub floor: f64,
    pub x: f64,
    pub y: f64,
}

impl Room {
    pub fn new(id: &str, name: &str, floor: f64, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            floor,
            x,
            y,
        }
    }
}

/// Raw graph tables as read from a graph file
///
/// `rooms` is the node table; `adjacency` maps a room id to its neighbors in
/// expansion order. Nothing here is validated until it becomes a `GraphModel`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDefinition {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub adjacency: HashMap<String, Vec<String>>,
}
