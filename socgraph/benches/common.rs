#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0x5f1c2a9be0d4e713;

/// Random directed edges between `0..n`, each vertex getting `out_degree`
/// out-neighbors on average. Self-loops and duplicates are not filtered.
pub fn random_edges(
    vertex_count: usize,
    out_degree: usize,
    rng: &mut Rng,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..vertex_count * out_degree)
        .map(move |_| (rng.usize(0..vertex_count), rng.usize(0..vertex_count)))
}

pub fn socgraph_random(
    vertex_count: usize,
    out_degree: usize,
    rng: &mut Rng,
) -> socgraph::core::Graph<usize> {
    let mut graph = socgraph::core::Graph::with_capacity(vertex_count);
    graph.extend_with_vertices(0..vertex_count);

    for (u, v) in random_edges(vertex_count, out_degree, rng) {
        graph.add_edge(u, v).unwrap();
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    out_degree: usize,
    rng: &mut Rng,
) -> petgraph::Graph<(), (), petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, vertex_count * out_degree);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for (u, v) in random_edges(vertex_count, out_degree, rng) {
        graph.update_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}
