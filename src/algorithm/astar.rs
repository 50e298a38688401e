use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::PathSearch;
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// The zero estimate: makes A* degenerate to plain Dijkstra
fn zero_heuristic<W>(_node: usize, _target: usize) -> W
where
    W: Float + Zero + Debug + Copy,
{
    W::zero()
}

/// A* search: Dijkstra with a heuristic term added to the priority used for
/// ordering, but not to the cost bookkeeping from the source.
///
/// The heuristic `h(node, target)` estimates the remaining cost from a node
/// to the target; it must never overestimate the true remaining cost
/// (admissible) for the returned path to be optimal.
pub struct AStar<'a, W, G, H>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    H: Fn(usize, usize) -> W,
{
    graph: &'a G,
    source: usize,
    target: usize,
    heuristic: H,

    /// Best provisional predecessor edge per discovered node
    frontier: HashMap<usize, Edge<W>>,
    /// Cost from the source per discovered node
    gcost: HashMap<usize, W>,
    /// gcost plus the heuristic estimate to the target; the heap's key
    fcost: HashMap<usize, W>,
    /// Finalized predecessor edges
    spt: HashMap<usize, Edge<W>>,

    err: Option<Error>,
}

impl<'a, W, G> AStar<'a, W, G, fn(usize, usize) -> W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Creates an A* search with the zero heuristic
    pub fn new(graph: &'a G, source: usize, target: usize) -> Self {
        Self::with_heuristic(graph, source, target, zero_heuristic)
    }
}

impl<'a, W, G, H> AStar<'a, W, G, H>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    H: Fn(usize, usize) -> W,
{
    /// Creates an A* search guided by the given heuristic
    pub fn with_heuristic(graph: &'a G, source: usize, target: usize, heuristic: H) -> Self {
        AStar {
            graph,
            source,
            target,
            heuristic,
            frontier: HashMap::new(),
            gcost: HashMap::new(),
            fcost: HashMap::new(),
            spt: HashMap::new(),
            err: None,
        }
    }
}

impl<'a, W, G, H> PathSearch<W> for AStar<'a, W, G, H>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    H: Fn(usize, usize) -> W,
{
    fn name(&self) -> &'static str {
        "A*"
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

        self.gcost.insert(self.source, W::zero());
        self.fcost.insert(self.source, W::zero());
        let mut pq = IndexedMinHeap::new();
        pq.insert(self.source, &self.fcost);

        while !pq.is_empty() {
            let mut i = match pq.pop_min(&self.fcost) {
                Ok(i) => i,
                Err(err) => {
                    self.err = Some(err);
                    return;
                }
            };

            if let Some(&edge) = self.frontier.get(&i) {
                self.spt.insert(i, edge);
                i = edge.to;
            }

            if i == self.target {
                return;
            }

            let gcost_i = self.gcost[&i];
            for e in self.graph.outgoing_edges(i) {
                let t = e.to;
                let g = gcost_i + e.cost;
                let f = g + (self.heuristic)(t, self.target);
                if !self.frontier.contains_key(&t) {
                    self.frontier.insert(t, e);
                    self.gcost.insert(t, g);
                    self.fcost.insert(t, f);
                    pq.insert(t, &self.fcost);
                } else if g < self.gcost[&t] && !self.spt.contains_key(&t) {
                    self.frontier.insert(t, e);
                    self.gcost.insert(t, g);
                    self.fcost.insert(t, f);
                    pq.change_priority(t, &self.fcost);
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
