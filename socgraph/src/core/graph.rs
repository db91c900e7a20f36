use std::{
    collections::{hash_set, HashMap},
    hash::BuildHasherDefault,
};

use rustc_hash::{FxHashMap, FxHashSet};

use super::{
    error::{AddEdgeError, AddEdgeErrorKind},
    id::IdType,
    neighbors::{GraphBase, Neighbors},
};

/// Directed graph stored as a mapping from a vertex to the set of its
/// out-neighbors.
///
/// Neighbor sets are unordered. The order in which neighbors are enumerated
/// (and thus the order in which traversals discover vertices) is unspecified
/// and should not be relied upon.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: FxHashMap<V, FxHashSet<V>>,
    edge_count: usize,
}

impl<V: IdType> Graph<V> {
    pub fn new() -> Self {
        Self {
            vertices: FxHashMap::default(),
            edge_count: 0,
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity_and_hasher(
                vertex_count,
                BuildHasherDefault::default(),
            ),
            edge_count: 0,
        }
    }

    /// Inserts the vertex with an empty set of out-neighbors.
    ///
    /// If the vertex already exists, its out-neighbors are forgotten. Edges
    /// pointing to it from other vertices are kept.
    pub fn add_vertex(&mut self, id: V) {
        if let Some(previous) = self.vertices.insert(id, FxHashSet::default()) {
            self.edge_count -= previous.len();
        }
    }

    /// Inserts a directed edge between two existing vertices.
    ///
    /// Adding an edge that already exists is a no-op. If any of the endpoints
    /// does not exist, the graph is left unchanged and an error is returned.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<(), AddEdgeError<V>> {
        if !self.vertices.contains_key(&from) {
            return Err(Self::reject(from, to, AddEdgeErrorKind::SourceAbsent));
        }

        if !self.vertices.contains_key(&to) {
            return Err(Self::reject(from, to, AddEdgeErrorKind::DestinationAbsent));
        }

        if let Some(neighbors) = self.vertices.get_mut(&from) {
            if neighbors.insert(to) {
                self.edge_count += 1;
            }
        }

        Ok(())
    }

    fn reject(from: V, to: V, kind: AddEdgeErrorKind) -> AddEdgeError<V> {
        tracing::warn!(?from, ?to, %kind, "rejected edge");
        AddEdgeError::new(from, to, kind)
    }

    /// Returns the set of out-neighbors of the vertex, or `None` if the vertex
    /// does not exist.
    pub fn neighbors(&self, id: &V) -> Option<&FxHashSet<V>> {
        self.vertices.get(id)
    }

    /// Returns the out-degree of the vertex, or `None` if the vertex does not
    /// exist.
    pub fn degree(&self, id: &V) -> Option<usize> {
        self.vertices.get(id).map(|neighbors| neighbors.len())
    }

    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.vertices
            .get(from)
            .map(|neighbors| neighbors.contains(to))
            .unwrap_or(false)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.keys()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.vertices
            .iter()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |to| (from, to)))
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    pub fn extend_with_vertices<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = V>,
    {
        for id in iter {
            self.add_vertex(id);
        }
    }

    /// Adds edges from the iterator, stopping at the first one that fails.
    ///
    /// Edges preceding the failing one stay in the graph.
    pub fn extend_with_edges<I>(&mut self, iter: I) -> Result<(), AddEdgeError<V>>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (from, to) in iter {
            self.add_edge(from, to)?;
        }

        Ok(())
    }
}

impl<V: IdType> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: IdType> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count && self.vertices == other.vertices
    }
}

impl<V: IdType> Eq for Graph<V> {}

impl<V: IdType> GraphBase for Graph<V> {
    type VertexId = V;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertex_count())
    }
}

impl<V: IdType> Neighbors for Graph<V> {
    type NeighborsIter<'a> = hash_set::Iter<'a, V>
    where
        Self: 'a;

    fn neighbors_iter(&self, from: &V) -> Option<Self::NeighborsIter<'_>> {
        self.vertices.get(from).map(|neighbors| neighbors.iter())
    }

    fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }
}
