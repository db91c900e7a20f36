use std::{collections::HashSet, hash::BuildHasherDefault};

use rustc_hash::FxHashSet;

use crate::{
    core::{Neighbors, Path},
    visit::VisitSet,
};

/// State threaded through the recursion. Owned by a single search call.
struct Search<'a, G: Neighbors> {
    graph: &'a G,
    goal: &'a G::VertexId,
    visited: FxHashSet<G::VertexId>,
    path: Vec<G::VertexId>,
    found: Option<Path<G::VertexId>>,
}

pub fn dfs_recursive<G>(
    graph: &G,
    start: G::VertexId,
    goal: &G::VertexId,
) -> Option<Path<G::VertexId>>
where
    G: Neighbors,
{
    let mut search = Search {
        graph,
        goal,
        visited: HashSet::with_capacity_and_hasher(
            graph.vertex_count_hint().unwrap_or(32),
            BuildHasherDefault::default(),
        ),
        path: Vec::new(),
        found: None,
    };

    search.explore(&start);
    search.found
}

impl<'a, G: Neighbors> Search<'a, G> {
    fn explore(&mut self, vertex: &G::VertexId) {
        if self.found.is_some() || !self.visited.visit(vertex.clone()) {
            return;
        }

        self.path.push(vertex.clone());
        let graph = self.graph;

        if vertex == self.goal {
            self.found = Some(Path::new_unchecked(self.path.clone()));
        } else if let Some(neighbors) = graph.neighbors_iter(vertex) {
            for neighbor in neighbors {
                self.explore(neighbor);

                // The goal was reached in the subtree, stop expanding the
                // remaining branches.
                if self.found.is_some() {
                    break;
                }
            }
        }

        self.path.pop();
    }
}
