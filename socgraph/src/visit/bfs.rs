use crate::core::Neighbors;

use super::{
    raw::{Queue, RawVisit},
    VisitSet, Visitor,
};

/// Breadth-first traversal.
///
/// The frontier is a FIFO queue seeded with the start vertex.
pub struct Bfs<G>
where
    G: Neighbors,
{
    raw: RawVisit<G::VertexId, Queue<G::VertexId>>,
}

pub struct BfsRooted<'a, G>
where
    G: Neighbors,
{
    raw: &'a mut RawVisit<G::VertexId, Queue<G::VertexId>>,
}

impl<G> Bfs<G>
where
    G: Neighbors,
{
    pub fn new(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_count_hint()),
        }
    }

    /// Starts the traversal from given root.
    ///
    /// Vertices visited by previous traversals of this visitor stay visited
    /// unless [`Bfs::reset`] is called.
    pub fn start(&mut self, root: G::VertexId) -> BfsRooted<'_, G> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet<G::VertexId> {
        &self.raw.visited
    }
}

impl<'a, G> Visitor<G> for BfsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Graph;

    use super::*;

    fn create_layered_graph() -> Graph<u32> {
        // 0 -> {1, 2}, 1 -> 3, 2 -> 3, 3 -> 4
        let mut graph = Graph::new();
        graph.extend_with_vertices(0..5);
        graph
            .extend_with_edges([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)])
            .unwrap();
        graph
    }

    #[test]
    fn level_order() {
        let graph = create_layered_graph();

        let order = Bfs::new(&graph).start(0).iter(&graph).collect::<Vec<_>>();

        assert_eq!(order.len(), 5);
        assert_eq!(order[0], 0);
        assert!(order[1..3].contains(&1) && order[1..3].contains(&2));
        assert_eq!(&order[3..], &[3, 4]);
    }

    #[test]
    fn visited_persists_between_starts() {
        let graph = create_layered_graph();
        let mut bfs = Bfs::new(&graph);

        let first = bfs.start(3).iter(&graph).collect::<Vec<_>>();
        assert_eq!(first, vec![3, 4]);

        // Already visited vertices are not emitted again.
        let second = bfs.start(0).iter(&graph).collect::<Vec<_>>();
        assert_eq!(second.len(), 3);
        assert!(!second.contains(&3));
        assert_eq!(bfs.visited().visited_count(), 5);

        bfs.reset();
        assert_eq!(bfs.visited().visited_count(), 0);
        assert_eq!(bfs.start(3).iter(&graph).count(), 2);
    }

    #[test]
    fn lazy() {
        let graph = create_layered_graph();
        let mut bfs = Bfs::new(&graph);
        let mut visitor = bfs.start(0);

        assert_eq!(visitor.visit_next(&graph), Some(0));
        drop(visitor);

        assert_eq!(bfs.visited().visited_count(), 1);
    }
}
