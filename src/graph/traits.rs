use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::Edge;

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the index is within the current node range
    fn has_node(&self, node: usize) -> bool;

    /// Returns an iterator over the outgoing edges of a node.
    /// Unknown nodes yield an empty iterator.
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_>;
}

/// Trait for building a graph from external edge data.
///
/// This is the only surface the edge-loading collaborator talks to; once a
/// graph has been handed to a search it is treated as read-only.
pub trait GraphBuilder<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Appends a node. The index must equal the next sequential index,
    /// otherwise the call is a no-op returning false.
    fn add_node(&mut self, index: usize) -> bool;

    /// Appends a directed weighted edge. A no-op returning false when either
    /// endpoint is outside the current node range.
    fn add_edge(&mut self, from: usize, to: usize, cost: W) -> bool;
}
