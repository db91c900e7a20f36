use super::id::IdType;

pub trait GraphBase {
    type VertexId: IdType;

    /// Returns the number of vertices if it is cheap to determine. Used for
    /// preallocating visited sets.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }
}

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = &'a Self::VertexId>
    where
        Self: 'a;

    /// Returns the out-neighbors of the vertex, or `None` if the vertex does
    /// not exist in the graph.
    ///
    /// `Some` of an empty iterator means that the vertex exists but has no
    /// outgoing edges.
    fn neighbors_iter(&self, from: &Self::VertexId) -> Option<Self::NeighborsIter<'_>>;

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.neighbors_iter(id).is_some()
    }
}
