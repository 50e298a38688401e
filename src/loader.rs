//! Loading of JSON edge-table map data.
//!
//! The on-disk format maps source node index to destination node index to a
//! weight object: `{"0": {"1": {"v": 2.9}}}`. The loader only ever talks to
//! the [`GraphBuilder`] construction interface; the rest of the library is
//! oblivious to the file format.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::graph::{AdjacencyGraph, GraphBuilder};
use crate::{Error, Result};

/// Weight payload of one edge table entry
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EdgeWeight {
    /// Edge traversal cost
    #[serde(rename = "v")]
    pub cost: f64,
}

/// Parsed edge table, keyed by source then destination index.
/// Ordered maps keep graph construction deterministic.
pub type EdgeTable = BTreeMap<usize, BTreeMap<usize, EdgeWeight>>;

/// Edge data loaded from a map file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapData {
    edges: EdgeTable,
}

impl MapData {
    /// Reads and parses a map file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| Error::MapRead(err.to_string()))?;
        Self::parse(&content)
    }

    /// Parses map data from a JSON string
    pub fn parse(content: &str) -> Result<Self> {
        let edges: EdgeTable =
            serde_json::from_str(content).map_err(|err| Error::MapParse(err.to_string()))?;
        Ok(MapData { edges })
    }

    /// One past the highest node index appearing anywhere in the table;
    /// zero for an empty table
    pub fn node_count(&self) -> usize {
        let mut max_index = None;
        for (&from, outgoing) in &self.edges {
            max_index = max_index.max(Some(from));
            if let Some(&to) = outgoing.keys().next_back() {
                max_index = max_index.max(Some(to));
            }
        }
        max_index.map_or(0, |index| index + 1)
    }

    /// Builds a directed graph with one edge per table entry.
    ///
    /// Nodes are created densely up to [`node_count`](Self::node_count), so
    /// indices appearing only as destinations exist too.
    pub fn directed_graph(&self) -> AdjacencyGraph<f64> {
        let mut graph = self.empty_graph();
        for (&from, outgoing) in &self.edges {
            for (&to, weight) in outgoing {
                graph.add_edge(from, to, weight.cost);
            }
        }
        graph
    }

    /// Builds an undirected-equivalent graph: every table entry is added in
    /// both directions, which is what bidirectional search expects. Entries
    /// the table already lists both ways end up duplicated; the multigraph
    /// model permits that.
    pub fn undirected_graph(&self) -> AdjacencyGraph<f64> {
        let mut graph = self.empty_graph();
        for (&from, outgoing) in &self.edges {
            for (&to, weight) in outgoing {
                graph.add_edge(from, to, weight.cost);
                graph.add_edge(to, from, weight.cost);
            }
        }
        graph
    }

    fn empty_graph(&self) -> AdjacencyGraph<f64> {
        let count = self.node_count();
        let mut graph = AdjacencyGraph::with_capacity(count);
        for index in 0..count {
            graph.add_node(index);
        }
        graph
    }
}
