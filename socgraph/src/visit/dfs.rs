use std::{collections::HashSet, hash::BuildHasherDefault};

use rustc_hash::FxHashSet;

use crate::core::Neighbors;

use super::{
    raw::{RawVisit, Stack},
    VisitSet, Visitor,
};

/// Iterative depth-first traversal.
///
/// The frontier is a LIFO stack seeded with the start vertex. Because the
/// neighbors are pushed to the stack in enumeration order, they are popped in
/// the reverse order.
pub struct Dfs<G>
where
    G: Neighbors,
{
    raw: RawVisit<G::VertexId, Stack<G::VertexId>>,
}

pub struct DfsRooted<'a, G>
where
    G: Neighbors,
{
    raw: &'a mut RawVisit<G::VertexId, Stack<G::VertexId>>,
}

impl<G> Dfs<G>
where
    G: Neighbors,
{
    pub fn new(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_count_hint()),
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> DfsRooted<'_, G> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet<G::VertexId> {
        &self.raw.visited
    }
}

impl<'a, G> Visitor<G> for DfsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

/// Recursive depth-first traversal.
///
/// Calls `emit` for every vertex reachable from `root` at the moment it is
/// first visited, then recurses into its neighbors in enumeration order.
/// Returns the set of visited vertices, which is empty if `root` is not in the
/// graph.
///
/// The recursion depth is bounded by the length of the longest simple path
/// explored, so very deep graphs may exhaust the program stack. Use [`Dfs`]
/// for those.
pub fn dfs_recursive<G, F>(graph: &G, root: G::VertexId, mut emit: F) -> FxHashSet<G::VertexId>
where
    G: Neighbors,
    F: FnMut(&G::VertexId),
{
    let mut visited = graph
        .vertex_count_hint()
        .map(|count| HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default()))
        .unwrap_or_default();

    visit_recursive(graph, &root, &mut visited, &mut emit);
    visited
}

fn visit_recursive<G, F>(
    graph: &G,
    vertex: &G::VertexId,
    visited: &mut FxHashSet<G::VertexId>,
    emit: &mut F,
) where
    G: Neighbors,
    F: FnMut(&G::VertexId),
{
    let Some(neighbors) = graph.neighbors_iter(vertex) else {
        return;
    };

    if !visited.visit(vertex.clone()) {
        return;
    }

    emit(vertex);

    for neighbor in neighbors {
        if !visited.is_visited(neighbor) {
            visit_recursive(graph, neighbor, visited, emit);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Graph;

    use super::*;

    fn create_tree() -> Graph<u32> {
        // 0 -> 1 -> {2, 3}, 0 -> 4
        let mut graph = Graph::new();
        graph.extend_with_vertices(0..5);
        graph
            .extend_with_edges([(0, 1), (1, 2), (1, 3), (0, 4)])
            .unwrap();
        graph
    }

    fn assert_depth_first(order: &[u32]) {
        // Whole subtree of 1 is visited contiguously.
        let pos = |v| order.iter().position(|&u| u == v).unwrap();
        assert_eq!(order[0], 0);
        assert_eq!(order.len(), 5);

        let subtree = [pos(1), pos(2), pos(3)];
        let min = *subtree.iter().min().unwrap();
        let max = *subtree.iter().max().unwrap();
        assert_eq!(max - min, 2);
        assert_eq!(min, pos(1));
    }

    #[test]
    fn iterative_goes_deep() {
        let graph = create_tree();
        let order = Dfs::new(&graph).start(0).iter(&graph).collect::<Vec<_>>();
        assert_depth_first(&order);
    }

    #[test]
    fn recursive_goes_deep() {
        let graph = create_tree();
        let mut order = Vec::new();

        let visited = dfs_recursive(&graph, 0, |&v| order.push(v));

        assert_depth_first(&order);
        assert_eq!(visited.len(), 5);
    }

    #[test]
    fn recursive_handles_cycles() {
        let mut graph = Graph::new();
        graph.extend_with_vertices(0..3);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 0), (2, 2)]).unwrap();

        let mut order = Vec::new();
        dfs_recursive(&graph, 1, |&v| order.push(v));

        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn recursive_root_absent() {
        let graph = create_tree();
        let mut count = 0;

        let visited = dfs_recursive(&graph, 10, |_| count += 1);

        assert!(visited.is_empty());
        assert_eq!(count, 0);
    }

    #[test]
    fn iterative_and_recursive_reach_same() {
        let mut graph = Graph::new();
        graph.extend_with_vertices(0..6);
        graph
            .extend_with_edges([(0, 1), (0, 2), (2, 3), (3, 1), (4, 5)])
            .unwrap();

        let mut dfs = Dfs::new(&graph);
        let iterative = dfs.start(0).iter(&graph).collect::<FxHashSet<_>>();
        let recursive = dfs_recursive(&graph, 0, |_| {});

        assert_eq!(iterative, recursive);
    }
}
