//! Error macros for roomsearch

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RoomsearchError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a graph definition
#[macro_export]
macro_rules! bail_invalid_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::RoomsearchError::invalid_graph(format!($($arg)*)))
    };
}
