use std::{ops::Deref, slice, vec};

use super::{id::IdType, neighbors::Neighbors};

/// A walk through a graph, represented as the sequence of vertices it passes.
///
/// A path always contains at least one vertex. The first vertex is the origin
/// of the search that produced it, the last one is the destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<V> {
    vertices: Vec<V>,
}

impl<V> Path<V> {
    /// Creates a path from a sequence of vertices, or returns `None` if the
    /// sequence is empty.
    ///
    /// The connectivity of the vertices is not checked. Use
    /// [`Path::is_valid_in`] for that.
    pub fn new(vertices: Vec<V>) -> Option<Self> {
        if vertices.is_empty() {
            None
        } else {
            Some(Self { vertices })
        }
    }

    pub(crate) fn new_unchecked(vertices: Vec<V>) -> Self {
        debug_assert!(!vertices.is_empty(), "path must not be empty");
        Self { vertices }
    }

    /// Path consisting of a single vertex and no edges.
    pub fn trivial(vertex: V) -> Self {
        Self {
            vertices: vec![vertex],
        }
    }

    pub fn start(&self) -> &V {
        &self.vertices[0]
    }

    pub fn end(&self) -> &V {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges on the path.
    pub fn edge_count(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn into_vec(self) -> Vec<V> {
        self.vertices
    }

    /// Returns a new path that continues from the end of this one to `next`.
    pub fn extended(&self, next: V) -> Self
    where
        V: Clone,
    {
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(next);
        Self { vertices }
    }

    /// Checks that every two consecutive vertices are connected by an edge in
    /// the graph and that all vertices exist.
    pub fn is_valid_in<G>(&self, graph: &G) -> bool
    where
        G: Neighbors<VertexId = V>,
        V: IdType,
    {
        graph.contains_vertex(self.start())
            && self.vertices.windows(2).all(|pair| {
                graph
                    .neighbors_iter(&pair[0])
                    .map(|mut neighbors| neighbors.any(|n| n == &pair[1]))
                    .unwrap_or(false)
            })
    }
}

impl<V> Deref for Path<V> {
    type Target = [V];

    fn deref(&self) -> &Self::Target {
        &self.vertices
    }
}

impl<V> From<Path<V>> for Vec<V> {
    fn from(path: Path<V>) -> Self {
        path.vertices
    }
}

impl<V> IntoIterator for Path<V> {
    type Item = V;
    type IntoIter = vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Path<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Graph;

    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert!(Path::<u32>::new(Vec::new()).is_none());
    }

    #[test]
    fn ends_and_length() {
        let path = Path::new(vec![3, 1, 4]).unwrap();

        assert_eq!(path.start(), &3);
        assert_eq!(path.end(), &4);
        assert_eq!(path.edge_count(), 2);
        assert_eq!(path.vertex_count(), 3);

        let trivial = Path::trivial(7);
        assert_eq!(trivial.start(), trivial.end());
        assert_eq!(trivial.edge_count(), 0);
    }

    #[test]
    fn extended() {
        let path = Path::trivial(1).extended(2).extended(3);
        assert_eq!(path.vertices(), &[1, 2, 3]);
    }

    #[test]
    fn validity() {
        let mut graph = Graph::new();
        graph.extend_with_vertices(0..4);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 3)]).unwrap();

        assert!(Path::new(vec![0, 1, 2, 3]).unwrap().is_valid_in(&graph));
        assert!(Path::trivial(2).is_valid_in(&graph));
        assert!(!Path::new(vec![0, 2]).unwrap().is_valid_in(&graph));
        assert!(!Path::new(vec![1, 0]).unwrap().is_valid_in(&graph));
        assert!(!Path::trivial(9).is_valid_in(&graph));
    }
}
