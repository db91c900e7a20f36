use proptest::{collection::vec, prelude::*};

use crate::core::Graph;

/// Directed graphs with vertices `0..n` for `n` in `1..=max_size` and up to
/// `2 * n` edges, self-loops included.
pub fn graph_directed(max_size: usize) -> impl Strategy<Value = Graph<usize>> {
    let max_size = max_size.max(1);

    (1..=max_size)
        .prop_flat_map(|n| (Just(n), vec((0..n, 0..n), 0..=2 * n)))
        .prop_map(|(n, edges)| {
            let mut graph = Graph::with_capacity(n);
            graph.extend_with_vertices(0..n);

            for (from, to) in edges {
                // Both endpoints are in `0..n`.
                let _ = graph.add_edge(from, to);
            }

            graph
        })
}

/// Graphs where every edge has its opposite and there are no self-loops, the
/// way friendships are stored.
pub fn graph_symmetric(max_size: usize) -> impl Strategy<Value = Graph<usize>> {
    let max_size = max_size.max(1);

    (1..=max_size)
        .prop_flat_map(|n| (Just(n), vec((0..n, 0..n), 0..=2 * n)))
        .prop_map(|(n, edges)| {
            let mut graph = Graph::with_capacity(n);
            graph.extend_with_vertices(0..n);

            for (u, v) in edges.into_iter().filter(|(u, v)| u != v) {
                let _ = graph.add_edge(u, v);
                let _ = graph.add_edge(v, u);
            }

            graph
        })
}

#[cfg(test)]
mod tests {
    use crate::infra::testing::{check_consistency, check_symmetric};

    use super::*;

    proptest! {
        #[test]
        fn generated_graphs_are_consistent(graph in graph_directed(16)) {
            prop_assert!(!graph.is_empty());
            prop_assert!(graph.vertices().all(|v| *v < graph.vertex_count()));
            prop_assert!(check_consistency(&graph).is_ok());
        }

        #[test]
        fn symmetric_graphs_are_symmetric(graph in graph_symmetric(16)) {
            prop_assert_eq!(graph.edge_count() % 2, 0);
            prop_assert!(check_symmetric(&graph).is_ok());
        }
    }
}
