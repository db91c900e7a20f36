use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
};

use rustc_hash::FxHashSet;

use crate::core::{IdType, Neighbors};

use super::VisitSet;

/// The pending-work collection driving a traversal or search.
pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

#[derive(Debug)]
pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) struct RawVisit<V, C> {
    pub collection: C,
    pub visited: FxHashSet<V>,
}

impl<V: IdType, C: TraversalCollection<V>> RawVisit<V, C> {
    pub fn new(count_hint: Option<usize>) -> Self {
        let visited = count_hint
            .map(|count| HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default()))
            .unwrap_or_default();

        Self {
            collection: C::default(),
            visited,
        }
    }

    pub fn start(&mut self, root: V) {
        self.collection.clear();
        self.collection.push(root);
    }

    pub fn reset(&mut self) {
        self.collection.clear();
        self.visited.reset_visited();
    }

    pub fn next<G>(&mut self, graph: &G) -> Option<V>
    where
        G: Neighbors<VertexId = V>,
    {
        while let Some(vertex) = self.collection.pop() {
            // A root that is not in the graph is silently skipped.
            let Some(neighbors) = graph.neighbors_iter(&vertex) else {
                continue;
            };

            if self.visited.visit(vertex.clone()) {
                // Neighbors are pushed unfiltered. A vertex can be in the
                // collection multiple times, but is emitted only on its first
                // pop.
                for neighbor in neighbors {
                    self.collection.push(neighbor.clone());
                }

                return Some(vertex);
            }
        }

        None
    }
}
