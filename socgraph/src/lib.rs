//! Directed graph with breadth-first and depth-first traversal and path
//! search, and an undirected social network model built on top of it.
//!
//! # Examples
//!
//! ```
//! use socgraph::{algo::PathSearch, core::Graph};
//!
//! let mut graph = Graph::new();
//! graph.extend_with_vertices(1..=4);
//! graph.extend_with_edges([(1, 2), (2, 3), (3, 4), (1, 3)]).unwrap();
//!
//! let path = PathSearch::on(&graph).bfs().run(1, 4).unwrap().unwrap();
//! assert_eq!(path.vertices(), &[1, 3, 4]);
//! ```

pub mod algo;
pub mod core;
pub mod infra;
pub mod social;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{core::Neighbors, visit::Visitor};
}
