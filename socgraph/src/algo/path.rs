//! Find a [path](Path) between two vertices of a graph.
//!
//! Three strategies are available, see [`Algo`]. All of them explore the graph
//! with a frontier of *paths so far* rather than single vertices and mark a
//! vertex as visited when the path ending in it is taken from the frontier.
//! Only the breadth-first search guarantees that the returned path is a
//! shortest one (in the number of edges).
//!
//! The depth-first variants return the first path they come across, which
//! depends on the order in which neighbors are enumerated. That order is
//! unspecified, so different graphs with the same edges may yield different
//! (but always valid) paths.
//!
//! # Examples
//!
//! ```
//! use socgraph::{algo::PathSearch, core::Graph};
//!
//! let mut graph = Graph::new();
//! graph.extend_with_vertices(1..=7);
//! graph
//!     .extend_with_edges([
//!         (5, 3), (6, 3), (7, 1), (4, 7), (1, 2),
//!         (7, 6), (2, 4), (3, 5), (2, 3), (4, 6),
//!     ])
//!     .unwrap();
//!
//! let shortest = PathSearch::on(&graph).bfs().run(1, 6).unwrap().unwrap();
//! assert_eq!(shortest.vertices(), &[1, 2, 4, 6]);
//!
//! let any = PathSearch::on(&graph).dfs().run(1, 6).unwrap().unwrap();
//! assert!(any.edge_count() >= 3);
//!
//! // 5 only leads back to 3.
//! assert!(PathSearch::on(&graph).run(5, 1).unwrap().is_none());
//! ```

use thiserror::Error;

use crate::{
    core::{Neighbors, Path},
    visit::{Bfs, Visitor},
};

mod builder;
mod dfs_recursive;
mod iterative;

pub use builder::PathSearch;

/// Algorithm for [`PathSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algo {
    /// Breadth-first search with a queue of paths. Returns a shortest path.
    #[default]
    Bfs,

    /// Depth-first search with a stack of paths. Returns any path.
    Dfs,

    /// Depth-first search using recursion. Returns any path and stops
    /// expanding as soon as the goal is reached.
    ///
    /// The recursion depth is bounded by the length of the longest simple
    /// path explored.
    DfsRecursive,
}

/// The error encountered during a [`PathSearch`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The start vertex is not in the graph.
    #[error("start vertex does not exist")]
    StartAbsent,
}

/// Returns a shortest path from `start` to `goal` using breadth-first search.
pub fn shortest_path<G>(
    graph: &G,
    start: G::VertexId,
    goal: G::VertexId,
) -> Result<Option<Path<G::VertexId>>, Error>
where
    G: Neighbors,
{
    PathSearch::on(graph).bfs().run(start, goal)
}

/// Returns any path from `start` to `goal` using iterative depth-first
/// search.
pub fn any_path<G>(
    graph: &G,
    start: G::VertexId,
    goal: G::VertexId,
) -> Result<Option<Path<G::VertexId>>, Error>
where
    G: Neighbors,
{
    PathSearch::on(graph).dfs().run(start, goal)
}

/// Returns `true` if `dst` is reachable from `src`. A vertex is always
/// reachable from itself as long as it is in the graph.
pub fn is_path_between<G>(graph: &G, src: &G::VertexId, dst: &G::VertexId) -> bool
where
    G: Neighbors,
{
    let mut bfs = Bfs::new(graph);
    let found = bfs.start(src.clone()).iter(graph).any(|v| &v == dst);
    found
}
