use rand::prelude::*;

use crate::graph::{AdjacencyGraph, GraphBuilder};

/// Generates a random directed graph with `out_degree` edges per node and
/// costs sampled uniformly from `1.0..max_cost`.
///
/// Edge targets are sampled uniformly, so self-loops and parallel edges can
/// occur; both are valid in the multigraph model.
pub fn random_graph(
    nodes: usize,
    out_degree: usize,
    max_cost: f64,
    rng: &mut impl Rng,
) -> AdjacencyGraph<f64> {
    assert!(max_cost > 1.0, "max_cost must be greater than 1.0");

    let mut graph = AdjacencyGraph::with_capacity(nodes);
    for index in 0..nodes {
        graph.add_node(index);
    }

    for from in 0..nodes {
        for _ in 0..out_degree {
            let to = rng.gen_range(0..nodes);
            let cost = rng.gen_range(1.0..max_cost);
            graph.add_edge(from, to, cost);
        }
    }

    graph
}

/// Generates a unit-cost grid graph with 4-connectivity.
///
/// Every lattice edge is added in both directions, making the graph
/// undirected-equivalent. Node index is `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> AdjacencyGraph<f64> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);
    for index in 0..width * height {
        graph.add_node(index);
    }

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            if x + 1 < width {
                graph.add_edge(node, node + 1, 1.0);
                graph.add_edge(node + 1, node, 1.0);
            }
            if y + 1 < height {
                graph.add_edge(node, node + width, 1.0);
                graph.add_edge(node + width, node, 1.0);
            }
        }
    }

    graph
}
