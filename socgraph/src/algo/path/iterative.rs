use std::{collections::HashSet, hash::BuildHasherDefault};

use rustc_hash::FxHashSet;

use crate::{
    core::{Neighbors, Path},
    visit::{
        raw::{Queue, Stack, TraversalCollection},
        VisitSet,
    },
};

pub fn bfs<G>(graph: &G, start: G::VertexId, goal: &G::VertexId) -> Option<Path<G::VertexId>>
where
    G: Neighbors,
{
    search::<G, Queue<Vec<G::VertexId>>>(graph, start, goal)
}

pub fn dfs<G>(graph: &G, start: G::VertexId, goal: &G::VertexId) -> Option<Path<G::VertexId>>
where
    G: Neighbors,
{
    search::<G, Stack<Vec<G::VertexId>>>(graph, start, goal)
}

fn search<G, C>(graph: &G, start: G::VertexId, goal: &G::VertexId) -> Option<Path<G::VertexId>>
where
    G: Neighbors,
    C: TraversalCollection<Vec<G::VertexId>>,
{
    let mut visited: FxHashSet<_> = HashSet::with_capacity_and_hasher(
        graph.vertex_count_hint().unwrap_or(32),
        BuildHasherDefault::default(),
    );

    // Each frontier element is the whole path so far, its last vertex being
    // the one to expand.
    let mut frontier = C::default();
    frontier.push(vec![start]);

    while let Some(path) = frontier.pop() {
        let Some(vertex) = path.last() else {
            continue;
        };

        if !visited.visit(vertex.clone()) {
            continue;
        }

        if vertex == goal {
            return Some(Path::new_unchecked(path));
        }

        if let Some(neighbors) = graph.neighbors_iter(vertex) {
            for neighbor in neighbors {
                let mut next = Vec::with_capacity(path.len() + 1);
                next.extend_from_slice(&path);
                next.push(neighbor.clone());
                frontier.push(next);
            }
        }
    }

    None
}
