//! Adjacency-list graph store and traversal engine
//!
//! - `store`: ordered vertex set with one adjacency row per vertex
//! - `traversal`: BFS, targeted BFS, DFS and hop distances over the store

pub mod store;
pub mod traversal;

pub use store::Graph;
pub use traversal::{bfs, bfs_find, bfs_layers, dfs, shortest_hops};

/// Graph of text labels built from interaction records.
pub type InteractionGraph = Graph<String>;
