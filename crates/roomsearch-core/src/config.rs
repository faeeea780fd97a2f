//! Search configuration for roomsearch
//!
//! Configuration lives in `roomsearch.toml` in the working directory, or in
//! `<config dir>/roomsearch/config.toml` for the current user.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RoomsearchError};
use crate::search::{Algorithm, SearchOptions};

pub use types::{SearchConfig, CONFIG_FILE_NAME};

impl SearchConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RoomsearchError::io_operation("read config", path.display(), e))?;
        let config: SearchConfig =
            toml::from_str(&content).map_err(|e| RoomsearchError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate().map_err(|e| RoomsearchError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoomsearchError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Find the configuration that applies to `dir`
    ///
    /// Looks for `roomsearch.toml` in `dir`, then the user config directory, and
    /// falls back to defaults when neither exists.
    pub fn discover(dir: &Path) -> Result<Self> {
        match Self::discover_path(dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let mut config = Self::load(&path)?;
                config.resolve_graph_file(&path);
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    fn discover_path(dir: &Path) -> Option<PathBuf> {
        let local = dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|base| base.join("roomsearch").join("config.toml"))
            .filter(|path| path.is_file())
    }

    /// Make a relative `graph_file` relative to the config file that named it
    pub fn resolve_graph_file(&mut self, config_path: &Path) {
        if let (Some(graph), Some(parent)) = (self.graph_file.as_ref(), config_path.parent()) {
            if graph.is_relative() {
                self.graph_file = Some(parent.join(graph));
            }
        }
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        self.default_algorithm.parse::<Algorithm>()?;
        if !(self.heuristic_scale.is_finite() && self.heuristic_scale > 0.0) {
            return Err(RoomsearchError::invalid_value(
                "heuristic_scale",
                self.heuristic_scale,
            ));
        }
        Ok(())
    }

    /// Engine options derived from this configuration
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            depth_limit: self.depth_limit,
            max_depth: self.max_depth,
        }
    }
}
