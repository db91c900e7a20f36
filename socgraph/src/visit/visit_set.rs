use std::{collections::HashSet, hash::BuildHasher, marker::PhantomData};

use fixedbitset::FixedBitSet;

use crate::core::{IdType, IntegerIdType};

/// Bookkeeping of vertices already seen by a traversal.
pub trait VisitSet<I: IdType> {
    /// Marks the vertex. Returns `false` if it was marked before.
    fn visit(&mut self, id: I) -> bool;

    fn is_visited(&self, id: &I) -> bool;

    fn visited_count(&self) -> usize;

    /// Unmarks all vertices.
    fn reset_visited(&mut self);
}

impl<I: IdType, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

/// Visit set for dense integer IDs, one bit per ID.
///
/// The set grows on demand, so the capacity is only a hint. IDs beyond the
/// current length are reported as not visited.
#[derive(Debug, Clone)]
pub struct TypedBitSet<I> {
    bits: FixedBitSet,
    ids: PhantomData<I>,
}

impl<I> TypedBitSet<I> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
            ids: PhantomData,
        }
    }
}

impl<I> Default for TypedBitSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IntegerIdType> VisitSet<I> for TypedBitSet<I> {
    fn visit(&mut self, id: I) -> bool {
        let bit = id.as_usize();

        if bit >= self.bits.len() {
            self.bits.grow(bit + 1);
        }

        !self.bits.put(bit)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.bits.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.bits.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.bits.clear()
    }
}
