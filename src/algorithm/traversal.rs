//! Plain depth-first and breadth-first path queries.
//!
//! Connectivity only: the returned path carries real graph edges but no
//! cost guarantee. Use [`Dijkstra`](crate::Dijkstra) or
//! [`AStar`](crate::AStar) when the cheapest route matters.

use num_traits::{Float, Zero};
use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;

use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// Finds any path from source to target by depth-first expansion
pub fn depth_first_search<W, G>(graph: &G, source: usize, target: usize) -> Result<Vec<Edge<W>>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if !graph.has_node(source) {
        return Err(Error::InvalidNodeIndex(source));
    }
    if !graph.has_node(target) {
        return Err(Error::InvalidNodeIndex(target));
    }
    if source == target {
        return Ok(Vec::new());
    }

    let mut stack: Vec<Edge<W>> = graph.outgoing_edges(source).collect();
    let mut record: HashMap<usize, Edge<W>> = HashMap::new();
    record.insert(source, Edge::unweighted(source, source));

    while let Some(edge) = stack.pop() {
        if edge.to == target {
            return rebuild_path(&record, edge, source);
        }
        if record.contains_key(&edge.to) {
            continue;
        }
        stack.extend(graph.outgoing_edges(edge.to));
        record.insert(edge.to, edge);
    }

    Err(Error::PathNotFound)
}

/// Finds a fewest-edge path from source to target by breadth-first expansion
pub fn breadth_first_search<W, G>(graph: &G, source: usize, target: usize) -> Result<Vec<Edge<W>>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if !graph.has_node(source) {
        return Err(Error::InvalidNodeIndex(source));
    }
    if !graph.has_node(target) {
        return Err(Error::InvalidNodeIndex(target));
    }
    if source == target {
        return Ok(Vec::new());
    }

    let mut queue: VecDeque<Edge<W>> = graph.outgoing_edges(source).collect();
    let mut record: HashMap<usize, Edge<W>> = HashMap::new();
    record.insert(source, Edge::unweighted(source, source));

    while let Some(edge) = queue.pop_front() {
        if edge.to == target {
            return rebuild_path(&record, edge, source);
        }
        if record.contains_key(&edge.to) {
            continue;
        }
        queue.extend(graph.outgoing_edges(edge.to));
        record.insert(edge.to, edge);
    }

    Err(Error::PathNotFound)
}

/// Walks the record map backward from the final edge and reverses
fn rebuild_path<W>(
    record: &HashMap<usize, Edge<W>>,
    last: Edge<W>,
    source: usize,
) -> Result<Vec<Edge<W>>>
where
    W: Float + Zero + Debug + Copy,
{
    let mut path = vec![last];
    let mut from = last.from;

    while from != source {
        let edge = match record.get(&from) {
            Some(&edge) => edge,
            None => return Err(Error::PathNotFound),
        };
        path.push(edge);
        from = edge.from;
    }

    path.reverse();
    Ok(path)
}
