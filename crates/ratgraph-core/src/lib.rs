//! Ratgraph Core Library
//!
//! Graph store, traversal engine and analytics for bipartite user/story
//! interaction networks.

pub mod analytics;
pub mod collections;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod ranking;
pub mod records;
pub mod tgf;
pub mod titles;
