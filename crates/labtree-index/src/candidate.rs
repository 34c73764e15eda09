//! Ranked search candidates
//!
//! Every search in this crate ranks entries by the same total order:
//! squared distance first, palette index second. Keeping a single key makes
//! the tree and the linear oracle agree on identity, not just on distance.

use labtree_core::{Lab, PaletteEntry, squared_distance};
use std::cmp::Ordering;

pub(crate) struct Candidate<'a, T> {
    pub(crate) dist_sq: f32,
    pub(crate) entry: &'a PaletteEntry<T>,
}

impl<'a, T> Candidate<'a, T> {
    #[inline]
    pub(crate) fn new(query: Lab, entry: &'a PaletteEntry<T>) -> Self {
        Self {
            dist_sq: squared_distance(query, entry.lab()),
            entry,
        }
    }
}

// Manual impls: a derive would require `T: Clone`.
impl<T> Clone for Candidate<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Candidate<'_, T> {}

impl<T> PartialEq for Candidate<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Candidate<'_, T> {}

impl<T> PartialOrd for Candidate<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Candidate<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .total_cmp(&other.dist_sq)
            .then_with(|| self.entry.index().cmp(&other.entry.index()))
    }
}
