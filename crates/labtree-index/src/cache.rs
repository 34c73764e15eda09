//! Nearest-color cache
//!
//! Images repeat colors heavily, so pixel pipelines usually memoize the
//! lookup. [`NearestCache`] is owned by the caller and passed alongside the
//! matcher; it keys on exact [`Rgb`] values and stores the palette index of
//! the resolved entry.

use crate::error::IndexResult;
use crate::matcher::PaletteMatcher;
use labtree_core::{PaletteEntry, Rgb};
use log::trace;
use std::collections::HashMap;

/// Caller-owned memo of `Rgb` query -> palette index
///
/// A cache is only meaningful for the palette it was filled from; call
/// [`clear`](Self::clear) before reusing it with another matcher.
#[derive(Debug, Clone, Default)]
pub struct NearestCache {
    resolved: HashMap<Rgb, usize>,
    hits: u64,
    misses: u64,
}

impl NearestCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with room for `capacity` colors
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            resolved: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Palette index for `color`, resolving and remembering it on a miss
    ///
    /// # Errors
    ///
    /// Propagates lookup errors from the matcher. Failed lookups are not
    /// cached.
    pub fn nearest_index<T>(
        &mut self,
        matcher: &PaletteMatcher<T>,
        color: Rgb,
    ) -> IndexResult<usize> {
        if let Some(&index) = self.resolved.get(&color) {
            self.hits += 1;
            return Ok(index);
        }

        let index = matcher.nearest_rgb(color)?.index();
        trace!("cache miss for {:?} -> palette index {}", color, index);
        self.misses += 1;
        self.resolved.insert(color, index);
        Ok(index)
    }

    /// Resolve `color` to its palette entry within `palette`
    ///
    /// `palette` must be the entry list the matcher was built from, in
    /// palette order.
    pub fn nearest_entry<'p, T>(
        &mut self,
        matcher: &PaletteMatcher<T>,
        palette: &'p [PaletteEntry<T>],
        color: Rgb,
    ) -> IndexResult<Option<&'p PaletteEntry<T>>> {
        let index = self.nearest_index(matcher, color)?;
        Ok(palette.get(index))
    }

    /// Previously resolved palette index, without touching the statistics
    pub fn get(&self, color: Rgb) -> Option<usize> {
        self.resolved.get(&color).copied()
    }

    /// Number of distinct colors resolved
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// Check if no color has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Number of lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that went to the matcher
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Forget all resolved colors and reset the statistics
    pub fn clear(&mut self) {
        self.resolved.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
