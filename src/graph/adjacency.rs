use num_traits::{Float, Zero};
use std::fmt;
use std::fmt::Debug;

use crate::graph::traits::{Graph, GraphBuilder};

/// A directed weighted edge between two node indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub cost: W,
}

impl<W> Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(from: usize, to: usize, cost: W) -> Self {
        Edge { from, to, cost }
    }

    /// An edge carrying the conventional unweighted cost of 1.0
    pub fn unweighted(from: usize, to: usize) -> Self {
        Edge {
            from,
            to,
            cost: W::one(),
        }
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} ({})", self.from, self.to, self.cost)
    }
}

/// An adjacency-list graph over dense integer node indices.
///
/// Nodes carry no payload beyond their index; indices are contiguous and
/// assigned in creation order. Parallel edges between the same pair are
/// permitted.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W> {
    /// Outgoing edges per node; the bucket position is the node index
    edges: Vec<Vec<Edge<W>>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph { edges: Vec::new() }
    }

    /// Creates a new empty graph with room reserved for the given node count
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyGraph {
            edges: Vec::with_capacity(nodes),
        }
    }
}

impl<W> Default for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.iter().map(|bucket| bucket.len()).sum()
    }

    fn has_node(&self, node: usize) -> bool {
        node < self.edges.len()
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        match self.edges.get(node) {
            Some(bucket) => Box::new(bucket.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> GraphBuilder<W> for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, index: usize) -> bool {
        if index != self.edges.len() {
            return false;
        }
        self.edges.push(Vec::new());
        true
    }

    fn add_edge(&mut self, from: usize, to: usize, cost: W) -> bool {
        if !self.has_node(from) || !self.has_node(to) {
            return false;
        }
        self.edges[from].push(Edge::new(from, to, cost));
        true
    }
}

impl<W> fmt::Display for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.edges.iter().enumerate() {
            write!(f, "{}-> ", index)?;
            for edge in bucket {
                write!(f, "{}; ", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
