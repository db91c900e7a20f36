use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::core::{Graph, IdType};

/// Directed graph on vertices 1 to 7 used across the tests.
///
/// ```text
/// 1 -> 2
/// 2 -> 3, 4
/// 3 -> 5
/// 4 -> 6, 7
/// 5 -> 3
/// 6 -> 3
/// 7 -> 1, 6
/// ```
pub fn create_sample_graph() -> Graph<u32> {
    let mut graph = Graph::with_capacity(7);
    graph.extend_with_vertices(1..=7);

    for (from, to) in [
        (5, 3),
        (6, 3),
        (7, 1),
        (4, 7),
        (1, 2),
        (7, 6),
        (2, 4),
        (3, 5),
        (2, 3),
        (4, 6),
    ] {
        // All endpoints were added above.
        let _ = graph.add_edge(from, to);
    }

    graph
}

/// Vertices reachable from `start`, computed as a fixpoint over all edges.
pub fn reachable_naive(graph: &Graph<usize>, start: usize) -> FxHashSet<usize> {
    let mut reachable = FxHashSet::default();

    if !graph.contains_vertex(&start) {
        return reachable;
    }

    reachable.insert(start);

    loop {
        let mut changed = false;

        for (from, to) in graph.edges() {
            if reachable.contains(from) {
                changed |= reachable.insert(*to);
            }
        }

        if !changed {
            return reachable;
        }
    }
}

/// Number of edges on a shortest path from `start` to every reachable vertex,
/// computed by repeated relaxation of all edges.
pub fn distances_naive(graph: &Graph<usize>, start: usize) -> FxHashMap<usize, usize> {
    let mut dist = FxHashMap::default();

    if !graph.contains_vertex(&start) {
        return dist;
    }

    dist.insert(start, 0);

    loop {
        let mut changed = false;

        for (from, to) in graph.edges() {
            let Some(&d) = dist.get(from) else {
                continue;
            };

            match dist.get(to) {
                Some(&current) if current <= d + 1 => {}
                _ => {
                    dist.insert(*to, d + 1);
                    changed = true;
                }
            }
        }

        if !changed {
            return dist;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to edge count ({1})")]
    DegreeSumMismatch(usize, usize),
    #[error("edge {0:?} -> {1:?} points to a vertex that does not exist")]
    DanglingEdge(String, String),
    #[error("edge {0:?} -> {1:?} has no opposite edge")]
    Asymmetric(String, String),
    #[error("vertex {0:?} has an edge to itself")]
    SelfLoop(String),
}

pub fn check_consistency<V: IdType>(graph: &Graph<V>) -> Result<(), ConsistencyCheckError> {
    let edge_count = graph.edge_count();

    let edges = graph.edges().count();
    if edges != edge_count {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            edges, edge_count,
        ));
    }

    let deg_sum = graph
        .vertices()
        .filter_map(|v| graph.degree(v))
        .sum::<usize>();
    if deg_sum != edge_count {
        return Err(ConsistencyCheckError::DegreeSumMismatch(deg_sum, edge_count));
    }

    if let Some((from, to)) = graph.edges().find(|(_, to)| !graph.contains_vertex(to)) {
        return Err(ConsistencyCheckError::DanglingEdge(
            format!("{from:?}"),
            format!("{to:?}"),
        ));
    }

    Ok(())
}

/// Checks that the graph models an undirected simple graph: every edge has its
/// opposite and there are no self-loops.
pub fn check_symmetric<V: IdType>(graph: &Graph<V>) -> Result<(), ConsistencyCheckError> {
    for (from, to) in graph.edges() {
        if from == to {
            return Err(ConsistencyCheckError::SelfLoop(format!("{from:?}")));
        }

        if !graph.contains_edge(to, from) {
            return Err(ConsistencyCheckError::Asymmetric(
                format!("{from:?}"),
                format!("{to:?}"),
            ));
        }
    }

    Ok(())
}
