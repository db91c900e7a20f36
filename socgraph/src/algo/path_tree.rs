//! Shortest paths from a single source to every reachable vertex.
//!
//! The tree is built with one breadth-first sweep. Each vertex records the
//! vertex it was discovered from, and a vertex is never expanded twice, so the
//! whole sweep is linear in the size of the reachable subgraph. Paths are
//! materialized only when asked for.

use std::{collections::HashMap, hash::BuildHasherDefault};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{IdType, Neighbors, Path, VertexAbsent},
    visit::{
        raw::{Queue, TraversalCollection},
        VisitSet,
    },
};

/// Breadth-first shortest path tree rooted in a source vertex.
#[derive(Debug, Clone)]
pub struct PathTree<V> {
    source: V,
    pred: FxHashMap<V, V>,
    // Vertices in the order of discovery, starting with the source.
    order: Vec<V>,
}

impl<V: IdType> PathTree<V> {
    /// Builds the tree using a hash set for tracking discovered vertices.
    pub fn run<G>(graph: &G, source: V) -> Result<Self, VertexAbsent<V>>
    where
        G: Neighbors<VertexId = V>,
    {
        Self::run_with(graph, source, FxHashSet::default())
    }

    /// Builds the tree using given set for tracking discovered vertices. The
    /// set is reset before the sweep.
    pub fn run_with<G, S>(graph: &G, source: V, mut discovered: S) -> Result<Self, VertexAbsent<V>>
    where
        G: Neighbors<VertexId = V>,
        S: VisitSet<V>,
    {
        if !graph.contains_vertex(&source) {
            return Err(VertexAbsent(source));
        }

        let capacity = graph.vertex_count_hint().unwrap_or(32);
        let mut pred: FxHashMap<V, V> =
            HashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default());
        let mut order = Vec::with_capacity(capacity);
        let mut queue = Queue::default();

        discovered.reset_visited();
        discovered.visit(source.clone());
        order.push(source.clone());
        queue.push(source.clone());

        while let Some(vertex) = queue.pop() {
            let Some(neighbors) = graph.neighbors_iter(&vertex) else {
                continue;
            };

            for neighbor in neighbors {
                // Vertices are marked when discovered, not when expanded, so
                // each is queued at most once.
                if discovered.visit(neighbor.clone()) {
                    pred.insert(neighbor.clone(), vertex.clone());
                    order.push(neighbor.clone());
                    queue.push(neighbor.clone());
                }
            }
        }

        Ok(Self {
            source,
            pred,
            order,
        })
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns `true` if the vertex is reachable from the source.
    pub fn contains(&self, vertex: &V) -> bool {
        vertex == &self.source || self.pred.contains_key(vertex)
    }

    /// Number of vertices reachable from the source, including the source.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`, the source is always reachable from itself.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Reachable vertices in the order they were discovered. The source comes
    /// first.
    pub fn reachable(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter()
    }

    /// Returns the vertex from which the given vertex was discovered, or
    /// `None` for the source and unreachable vertices.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.pred.get(vertex)
    }

    /// Returns the number of edges on a shortest path from the source to the
    /// vertex, or `None` if the vertex is not reachable.
    pub fn distance(&self, vertex: &V) -> Option<usize> {
        if !self.contains(vertex) {
            return None;
        }

        let mut dist = 0;
        let mut curr = vertex;

        while let Some(prev) = self.pred.get(curr) {
            dist += 1;
            curr = prev;
        }

        Some(dist)
    }

    /// Returns a shortest path from the source to the vertex, or `None` if the
    /// vertex is not reachable.
    pub fn reconstruct(&self, to: &V) -> Option<Path<V>> {
        if !self.contains(to) {
            return None;
        }

        let mut vertices = vec![to.clone()];
        let mut curr = to;

        while let Some(prev) = self.pred.get(curr) {
            vertices.push(prev.clone());
            curr = prev;
        }

        vertices.reverse();
        Some(Path::new_unchecked(vertices))
    }

    /// Materializes the shortest path to every reachable vertex.
    ///
    /// Each path is built by extending the already built path of the vertex
    /// it was discovered from.
    pub fn into_paths(self) -> FxHashMap<V, Path<V>> {
        let mut paths: FxHashMap<V, Path<V>> =
            HashMap::with_capacity_and_hasher(self.order.len(), BuildHasherDefault::default());

        for vertex in self.order {
            // Discovery order guarantees that the predecessor is already done.
            let path = match self.pred.get(&vertex).and_then(|prev| paths.get(prev)) {
                Some(prev_path) => prev_path.extended(vertex.clone()),
                None => Path::trivial(vertex.clone()),
            };

            paths.insert(vertex, path);
        }

        paths
    }
}
