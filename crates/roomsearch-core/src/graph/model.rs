use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::bail_invalid_graph;
use crate::error::{Result, RoomsearchError};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{GraphDefinition, Room};

/// Immutable room graph with a coordinate-based heuristic
///
/// Built once and shared read-only by every search. The adjacency relation is
/// checked for symmetry on construction.
#[derive(Debug, Clone)]
pub struct GraphModel {
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
    adjacency: HashMap<String, Vec<String>>,
    heuristic_scale: f64,
}

impl GraphModel {
    pub const DEFAULT_HEURISTIC_SCALE: f64 = 50.0;

    /// Build a graph from a node table and an adjacency table
    pub fn from_tables(rooms: Vec<Room>, adjacency: HashMap<String, Vec<String>>) -> Result<Self> {
        let mut index = HashMap::with_capacity(rooms.len());
        for (i, room) in rooms.iter().enumerate() {
            if index.insert(room.id.clone(), i).is_some() {
                bail_invalid_graph!("duplicate room id '{}'", room.id);
            }
        }

        let model = Self {
            rooms,
            index,
            adjacency,
            heuristic_scale: Self::DEFAULT_HEURISTIC_SCALE,
        };
        model.validate_adjacency()?;
        Ok(model)
    }

    pub fn from_definition(definition: GraphDefinition) -> Result<Self> {
        Self::from_tables(definition.rooms, definition.adjacency)
    }

    /// Load a graph definition from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RoomsearchError::io_operation("read graph", path.display(), e))?;
        let definition: GraphDefinition = toml::from_str(&content)?;
        let model = Self::from_definition(definition)?;
        tracing::debug!(
            path = %path.display(),
            rooms = model.rooms.len(),
            edges = model.edge_count(),
            "loaded graph"
        );
        Ok(model)
    }

    /// Use a different coordinate scale for the heuristic
    pub fn with_heuristic_scale(mut self, scale: f64) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RoomsearchError::invalid_value("heuristic_scale", scale));
        }
        self.heuristic_scale = scale;
        Ok(self)
    }

    fn validate_adjacency(&self) -> Result<()> {
        // Walk rooms in table order so the first reported problem is stable
        let mut keys: Vec<&String> = self.adjacency.keys().collect();
        keys.sort_by_key(|id| self.index.get(*id).copied().unwrap_or(usize::MAX));

        for id in keys {
            if !self.index.contains_key(id) {
                bail_invalid_graph!("adjacency lists unknown room '{}'", id);
            }
            let neighbors = &self.adjacency[id];
            let mut seen = HashSet::with_capacity(neighbors.len());
            for neighbor in neighbors {
                if neighbor == id {
                    bail_invalid_graph!("room '{}' lists itself as a neighbor", id);
                }
                if !seen.insert(neighbor) {
                    bail_invalid_graph!("room '{}' lists neighbor '{}' twice", id, neighbor);
                }
                if !self.index.contains_key(neighbor) {
                    bail_invalid_graph!("room '{}' lists unknown neighbor '{}'", id, neighbor);
                }
                if !self.neighbors(neighbor).contains(id) {
                    bail_invalid_graph!(
                        "asymmetric adjacency: '{}' lists '{}' but '{}' does not list '{}'",
                        id,
                        neighbor,
                        neighbor,
                        id
                    );
                }
            }
        }
        Ok(())
    }

    /// Rooms in node-table order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn heuristic_scale(&self) -> f64 {
        self.heuristic_scale
    }

    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.neighbors(a).iter().any(|n| n == b)
    }

    /// True when `path` is a non-empty walk over existing edges with no repeated room
    pub fn is_simple_path(&self, path: &[String]) -> bool {
        let mut seen = HashSet::with_capacity(path.len());
        !path.is_empty()
            && path.iter().all(|id| self.contains(id) && seen.insert(id))
            && path.windows(2).all(|pair| self.are_adjacent(&pair[0], &pair[1]))
    }
}

impl GraphProvider for GraphModel {
    fn neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn heuristic(&self, from: &str, to: &str) -> f64 {
        match (self.room(from), self.room(to)) {
            (Some(a), Some(b)) => {
                (a.x - b.x).abs() / self.heuristic_scale + (a.y - b.y).abs() / self.heuristic_scale
            }
            _ => 0.0,
        }
    }

    fn room(&self, id: &str) -> Option<&Room> {
        self.index.get(id).map(|&i| &self.rooms[i])
    }
}
