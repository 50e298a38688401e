//! Pathfind - shortest path search over weighted directed graphs
//!
//! This library provides single-pair lowest-cost search (Dijkstra and its
//! heuristic-guided variant A*) built on an indexed n-ary min-heap with
//! in-place priority updates, a concurrent bidirectional breadth-first
//! search, and plain DFS/BFS traversal for connectivity-only queries.
//!
//! Callers build an [`AdjacencyGraph`] from edge data (directly or through
//! the [`loader`] module), run a search over a `(source, target)` pair, and
//! retrieve the resulting edge sequence.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod loader;

pub use algorithm::{AStar, BidirectionalBfs, Dijkstra, PathSearch};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Edge};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid node index: {0}")]
    InvalidNodeIndex(usize),

    #[error("path not found")]
    PathNotFound,

    #[error("empty heap")]
    EmptyHeap,

    #[error("failed to read map data: {0}")]
    MapRead(String),

    #[error("failed to parse map data: {0}")]
    MapParse(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
