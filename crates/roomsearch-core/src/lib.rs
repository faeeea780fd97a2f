//! Roomsearch Core Library
//!
//! Search engine for the roomsearch CLI: an immutable room graph, cooperative
//! cancellation, and nine classical search strategies that report their progress
//! through a trace sink.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod search;
pub mod session;
