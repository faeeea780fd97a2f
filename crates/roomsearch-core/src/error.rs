//! Error types and exit codes for roomsearch
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including an interrupted search)
//! - 2: Usage error (bad flags/args, unknown algorithm, same start and goal)
//! - 3: Data error (unknown room, invalid graph definition)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the roomsearch CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown room, invalid graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during roomsearch operations
#[derive(Error, Debug)]
pub enum RoomsearchError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {key} (supported: {supported})")]
    UnknownAlgorithm { key: String, supported: String },

    #[error("start and goal rooms cannot be the same: {room}")]
    SameRoom { room: String },

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("room not found: {id}")]
    RoomNotFound { id: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("Search interrupted.")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl RoomsearchError {
    /// Create an error for an invalid graph definition
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        RoomsearchError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RoomsearchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RoomsearchError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoomsearchError::UnknownFormat(_)
            | RoomsearchError::UnknownAlgorithm { .. }
            | RoomsearchError::SameRoom { .. }
            | RoomsearchError::UsageError(_)
            | RoomsearchError::InvalidValue { .. } => ExitCode::Usage,

            RoomsearchError::RoomNotFound { .. }
            | RoomsearchError::InvalidGraph { .. }
            | RoomsearchError::InvalidConfig { .. } => ExitCode::Data,

            RoomsearchError::Io(_)
            | RoomsearchError::Json(_)
            | RoomsearchError::Toml(_)
            | RoomsearchError::FailedOperationWithTarget { .. }
            | RoomsearchError::Interrupted
            | RoomsearchError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RoomsearchError::UnknownFormat(_) => "unknown_format",
            RoomsearchError::UnknownAlgorithm { .. } => "unknown_algorithm",
            RoomsearchError::SameRoom { .. } => "same_room",
            RoomsearchError::UsageError(_) => "usage_error",
            RoomsearchError::InvalidValue { .. } => "invalid_value",
            RoomsearchError::RoomNotFound { .. } => "room_not_found",
            RoomsearchError::InvalidGraph { .. } => "invalid_graph",
            RoomsearchError::InvalidConfig { .. } => "invalid_config",
            RoomsearchError::Io(_) => "io_error",
            RoomsearchError::Json(_) => "json_error",
            RoomsearchError::Toml(_) => "toml_error",
            RoomsearchError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RoomsearchError::Interrupted => "interrupted",
            RoomsearchError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roomsearch operations
pub type Result<T> = std::result::Result<T, RoomsearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_room_message() {
        let err = RoomsearchError::SameRoom {
            room: "LR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "start and goal rooms cannot be the same: LR"
        );
        assert_eq!(err.exit_code(), ExitCode::Usage);
    }

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(
            RoomsearchError::RoomNotFound { id: "X".into() }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            RoomsearchError::invalid_graph("asymmetric").exit_code(),
            ExitCode::Data
        );
        assert_eq!(RoomsearchError::Interrupted.exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Usage), 2);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = RoomsearchError::UnknownAlgorithm {
            key: "dijkstra".to_string(),
            supported: "astar".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "unknown_algorithm");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("dijkstra"));
    }
}
