//! The built-in two-storey house

use std::collections::HashMap;

use crate::error::Result;
use crate::graph::model::GraphModel;
use crate::graph::types::Room;

const ROOMS: &[(&str, &str, f64, f64, f64)] = &[
    // First floor
    ("SR", "Study Room", 1.0, 50.0, 120.0),
    ("CR1", "Common Room 1", 1.0, 200.0, 120.0),
    ("CB", "Common Bathroom", 1.0, 350.0, 120.0),
    ("LR", "Living Room", 1.0, 200.0, 200.0),
    ("DR", "Dining Room", 1.0, 350.0, 200.0),
    ("K", "Kitchen", 1.0, 500.0, 200.0),
    ("G", "Garage", 1.0, 650.0, 200.0),
    ("STR", "Storage Room", 1.0, 650.0, 280.0),
    ("STAIRCASE", "Staircase", 1.5, 100.0, 280.0),
    // Second floor
    ("SFLR", "Second Floor Living Room", 2.0, 200.0, 450.0),
    ("MB", "Master Bedroom", 2.0, 350.0, 450.0),
    ("MBR", "Master Bathroom", 2.0, 500.0, 450.0),
    ("BR1", "Bedroom 1", 2.0, 200.0, 550.0),
    ("BR2", "Bedroom 2", 2.0, 350.0, 550.0),
    ("BR3", "Bedroom 3", 2.0, 150.0, 650.0),
    ("BR4", "Bedroom 4", 2.0, 400.0, 650.0),
    ("BR5", "Bedroom 5", 2.0, 100.0, 750.0),
    ("BR6", "Bedroom 6", 2.0, 450.0, 750.0),
];

const ADJACENCY: &[(&str, &[&str])] = &[
    ("LR", &["DR", "CR1", "STAIRCASE"]),
    ("DR", &["LR", "K"]),
    ("K", &["DR", "G"]),
    ("G", &["K", "STR"]),
    ("CR1", &["LR", "CB", "SR"]),
    ("SR", &["CR1"]),
    ("CB", &["CR1"]),
    ("STR", &["G"]),
    ("STAIRCASE", &["LR", "SFLR"]),
    ("SFLR", &["STAIRCASE", "MB", "BR1", "BR2"]),
    ("MB", &["SFLR", "MBR"]),
    ("MBR", &["MB"]),
    ("BR1", &["SFLR", "BR3"]),
    ("BR2", &["SFLR", "BR4"]),
    ("BR3", &["BR1", "BR5"]),
    ("BR4", &["BR2", "BR6"]),
    ("BR5", &["BR3"]),
    ("BR6", &["BR4"]),
];

/// Build the house graph
pub fn house_graph() -> Result<GraphModel> {
    let rooms = ROOMS
        .iter()
        .map(|&(id, name, floor, x, y)| Room::new(id, name, floor, x, y))
        .collect();
    let adjacency: HashMap<String, Vec<String>> = ADJACENCY
        .iter()
        .map(|(id, neighbors)| {
            (
                id.to_string(),
                neighbors.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect();
    GraphModel::from_tables(rooms, adjacency)
}
