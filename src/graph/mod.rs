//! Link-graph construction and representation
//!
//! This module builds the directed adjacency matrix between named
//! documents and stores it in a frozen, read-optimized form.

pub mod adjacency;
pub mod builder;

pub use adjacency::AdjacencyGraph;
pub use builder::GraphBuilder;
