//! Room graph model
//!
//! Provides the data the search engine walks over:
//! - `GraphModel`, an immutable, symmetry-checked adjacency relation
//! - the built-in house graph
//! - `GraphProvider`, the read-only view every search strategy consumes

pub mod house;
pub mod model;
pub mod traversal;
pub mod types;

pub use house::house_graph;
pub use model::GraphModel;
pub use traversal::GraphProvider;
pub use types::{GraphDefinition, Room};

#[cfg(test)]
pub(crate) mod fixtures;
