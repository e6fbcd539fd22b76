//! FIFO and LIFO containers driving the traversal engine
//!
//! - `CircularQueue`: growable ring buffer, frontier for BFS
//! - `Stack`: vector-backed stack, frontier for DFS
//!
//! Inspecting or removing from an empty container is an
//! `EmptyCollection` error rather than an `Option`, so traversal code that
//! misuses a frontier fails loudly.

pub mod queue;
pub mod stack;

pub use queue::CircularQueue;
pub use stack::Stack;
