//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "roomsearch.toml";

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Algorithm used when the CLI is not given one
    #[serde(default = "default_algorithm")]
    pub default_algorithm: String,

    /// Depth bound for depth-limited search
    #[serde(default = "default_depth_limit")]
    pub depth_limit: usize,

    /// Largest depth tried by iterative-deepening search
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Coordinate units per unit of heuristic distance
    #[serde(default = "default_heuristic_scale")]
    pub heuristic_scale: f64,

    /// Graph definition to load instead of the built-in house (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_file: Option<PathBuf>,
}

fn default_algorithm() -> String {
    "breadth-first".to_string()
}

fn default_depth_limit() -> usize {
    3
}

fn default_max_depth() -> usize {
    10
}

fn default_heuristic_scale() -> f64 {
    50.0
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
            depth_limit: default_depth_limit(),
            max_depth: default_max_depth(),
            heuristic_scale: default_heuristic_scale(),
            graph_file: None,
        }
    }
}
