//! CLI commands for roomsearch

pub mod algorithms;
pub mod dispatch;
pub mod rooms;
pub mod search;
