//! Traits for types used as vertex identifiers.
//!
//! Any `Clone + Eq + Hash + Debug` type can identify a vertex. Integer-like
//! identifiers should additionally implement [`IntegerIdType`], which lets
//! algorithms track visited vertices in a bit set instead of a hash set.

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex in a graph.
///
/// Identifiers are not required to be ordered.
pub trait IdType: Clone + Eq + Hash + Debug {}

impl<T> IdType for T where T: Clone + Eq + Hash + Debug {}

/// Type-level specification that an ID type is representable by integer.
///
/// All integer values up to some upper bound should be valid IDs and there
/// should be no discontinuity, so that the IDs can index a contiguous
/// structure.
pub trait IntegerIdType: IdType + Copy {
    /// Converts an ID into the corresponding `usize`.
    fn as_usize(&self) -> usize;

    /// Converts an `usize` into the corresponding ID.
    fn from_usize(id: usize) -> Self;
}

macro_rules! impl_integer_id_type {
    ($($int:ty),*) => {
        $(
            impl IntegerIdType for $int {
                fn as_usize(&self) -> usize {
                    *self as usize
                }

                fn from_usize(id: usize) -> Self {
                    id as $int
                }
            }
        )*
    };
}

impl_integer_id_type!(u8, u16, u32, u64, usize);
