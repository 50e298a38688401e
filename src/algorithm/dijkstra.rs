use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::PathSearch;
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// Dijkstra's algorithm: single-pair lowest-cost search over a weighted
/// directed graph with non-negative edge costs.
///
/// The search keeps a frontier of provisional predecessor edges keyed by the
/// indexed min-heap; a node's frontier entry may be replaced by a cheaper
/// edge until the node is popped as a minimum and committed to the shortest
/// path tree, after which it is never revised.
#[derive(Debug)]
pub struct Dijkstra<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: &'a G,
    source: usize,
    target: usize,

    /// Best provisional predecessor edge per discovered node
    frontier: HashMap<usize, Edge<W>>,
    /// Tentative cost from the source per discovered node
    cost: HashMap<usize, W>,
    /// Finalized predecessor edges
    spt: HashMap<usize, Edge<W>>,

    err: Option<Error>,
}

impl<'a, W, G> Dijkstra<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Creates a search for the lowest-cost path from source to target
    pub fn new(graph: &'a G, source: usize, target: usize) -> Self {
        Dijkstra {
            graph,
            source,
            target,
            frontier: HashMap::new(),
            cost: HashMap::new(),
            spt: HashMap::new(),
            err: None,
        }
    }
}

impl<'a, W, G> PathSearch<W> for Dijkstra<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn run(&mut self) {
        if !self.graph.has_node(self.source) {
            self.err = Some(Error::InvalidNodeIndex(self.source));
            return;
        }
        if !self.graph.has_node(self.target) {
            self.err = Some(Error::InvalidNodeIndex(self.target));
            return;
        }

        self.cost.insert(self.source, W::zero());
        let mut pq = IndexedMinHeap::new();
        pq.insert(self.source, &self.cost);

        while !pq.is_empty() {
            let mut i = match pq.pop_min(&self.cost) {
                Ok(i) => i,
                Err(err) => {
                    self.err = Some(err);
                    return;
                }
            };

            // First pop of a node finalizes its frontier edge; the spt check
            // in the relaxation below rejects later revisions.
            if let Some(&edge) = self.frontier.get(&i) {
                self.spt.insert(i, edge);
                i = edge.to;
            }

            if i == self.target {
                return;
            }

            let cost_i = self.cost[&i];
            for e in self.graph.outgoing_edges(i) {
                let t = e.to;
                let new_cost = cost_i + e.cost;
                if !self.frontier.contains_key(&t) {
                    self.frontier.insert(t, e);
                    self.cost.insert(t, new_cost);
                    pq.insert(t, &self.cost);
                } else if new_cost < self.cost[&t] && !self.spt.contains_key(&t) {
                    // Still open to revision: the cheaper edge replaces the
                    // provisional one and the heap re-settles.
                    self.frontier.insert(t, e);
                    self.cost.insert(t, new_cost);
                    pq.change_priority(t, &self.cost);
                }
            }
        }
    }

    fn path_to_target(&self) -> Result<Vec<Edge<W>>> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        let mut path = Vec::new();
        let mut idx = self.target;
        while idx != self.source {
            let edge = match self.spt.get(&idx) {
                Some(&edge) => edge,
                None => return Err(Error::PathNotFound),
            };
            path.push(edge);
            idx = edge.from;
        }

        path.reverse();
        Ok(path)
    }
}
