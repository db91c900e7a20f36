use crate::core::{Neighbors, Path};

use super::{dfs_recursive::dfs_recursive, iterative, Algo, Error};

/// Search for a path between two vertices.
///
/// See [module](super) documentation for details and example.
pub struct PathSearch<'a, G> {
    graph: &'a G,
    algo: Algo,
}

impl<'a, G> PathSearch<'a, G>
where
    G: Neighbors,
{
    /// Prepares a search on the graph. Breadth-first search is used unless
    /// specified otherwise.
    pub fn on(graph: &'a G) -> Self {
        Self {
            graph,
            algo: Algo::Bfs,
        }
    }

    pub fn bfs(self) -> Self {
        self.using(Algo::Bfs)
    }

    pub fn dfs(self) -> Self {
        self.using(Algo::Dfs)
    }

    pub fn dfs_recursive(self) -> Self {
        self.using(Algo::DfsRecursive)
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    pub fn algo(&self) -> Algo {
        self.algo
    }

    /// Runs the search from `start` to `goal`.
    ///
    /// Returns `Ok(None)` if there is no path, including the case when `goal`
    /// is not in the graph. Returns an error if `start` is not in the graph.
    pub fn run(
        self,
        start: G::VertexId,
        goal: G::VertexId,
    ) -> Result<Option<Path<G::VertexId>>, Error> {
        if !self.graph.contains_vertex(&start) {
            tracing::debug!(?start, "path search start is not in the graph");
            return Err(Error::StartAbsent);
        }

        let path = match self.algo {
            Algo::Bfs => iterative::bfs(self.graph, start, &goal),
            Algo::Dfs => iterative::dfs(self.graph, start, &goal),
            Algo::DfsRecursive => dfs_recursive(self.graph, start, &goal),
        };

        match path {
            Some(ref path) => {
                tracing::trace!(algo = ?self.algo, edges = path.edge_count(), "path found")
            }
            None => tracing::trace!(algo = ?self.algo, ?goal, "no path"),
        }

        Ok(path)
    }
}
