//! Implementations of graph traversal methods.
//!
//! [`Bfs`] and [`Dfs`] are **iterative** visitors driven by a queue or a
//! stack, respectively. They are lazy, can be stopped at any point and are
//! detached from the graph, so the same visitor state can be reused for
//! multiple traversals. [`dfs_recursive`] is an eager alternative that uses
//! the program stack and reports each vertex through a callback.
//!
//! All traversals visit every vertex reachable from the start exactly once and
//! emit it at the moment it is first visited. Vertices unreachable from the
//! start are never emitted.
//!
//! The order in which the neighbors of a vertex are discovered is not specified
//! and should not be relied upon. In particular, iterative and recursive
//! depth-first traversals may produce different orders on the same graph.
//!
//! # Examples
//!
//! ```
//! use socgraph::{
//!     core::Graph,
//!     visit::{Bfs, Visitor},
//! };
//!
//! let mut graph = Graph::new();
//! graph.extend_with_vertices(["a", "b", "c", "d"]);
//! graph.extend_with_edges([("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
//!
//! let mut bfs = Bfs::new(&graph);
//! let visited = bfs.start("a").iter(&graph).collect::<Vec<_>>();
//!
//! // "d" is not reachable.
//! assert_eq!(visited, vec!["a", "b", "c"]);
//! ```

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{dfs_recursive, Dfs},
    visit_set::{TypedBitSet, VisitSet},
};

use crate::core::{Neighbors, VertexAbsent};

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and thus allows passing the visitor
    /// around without lifetime problems. Mutating the graph while a traversal
    /// is in progress is not supported.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Collects the breadth-first visitation order from `start`.
///
/// Unlike the lazy [`Bfs`] visitor, which emits nothing for a start vertex
/// that is not in the graph, this returns an error in such case.
pub fn bft<G>(
    graph: &G,
    start: G::VertexId,
) -> Result<Vec<G::VertexId>, VertexAbsent<G::VertexId>>
where
    G: Neighbors,
{
    ensure_vertex(graph, start).map(|start| {
        let mut bfs = Bfs::new(graph);
        let order = bfs.start(start).iter(graph).collect();
        order
    })
}

/// Collects the iterative depth-first visitation order from `start`.
///
/// Returns an error if `start` is not in the graph.
pub fn dft<G>(
    graph: &G,
    start: G::VertexId,
) -> Result<Vec<G::VertexId>, VertexAbsent<G::VertexId>>
where
    G: Neighbors,
{
    ensure_vertex(graph, start).map(|start| {
        let mut dfs = Dfs::new(graph);
        let order = dfs.start(start).iter(graph).collect();
        order
    })
}

/// Collects the recursive depth-first visitation order from `start`.
///
/// Returns an error if `start` is not in the graph.
pub fn dft_recursive<G>(
    graph: &G,
    start: G::VertexId,
) -> Result<Vec<G::VertexId>, VertexAbsent<G::VertexId>>
where
    G: Neighbors,
{
    ensure_vertex(graph, start).map(|start| {
        let mut order = Vec::new();
        dfs_recursive(graph, start, |vertex| order.push(vertex.clone()));
        order
    })
}

fn ensure_vertex<G>(
    graph: &G,
    vertex: G::VertexId,
) -> Result<G::VertexId, VertexAbsent<G::VertexId>>
where
    G: Neighbors,
{
    if graph.contains_vertex(&vertex) {
        Ok(vertex)
    } else {
        tracing::debug!(?vertex, "traversal start is not in the graph");
        Err(VertexAbsent(vertex))
    }
}
