//! Palette matcher
//!
//! Front end for callers that hold a palette of device colors: converts the
//! palette to LAB once, then answers RGB or LAB queries with either a linear
//! scan or a [`KdTree`], depending on palette size.

use crate::brute::{k_nearest_brute_force, nearest_brute_force};
use crate::error::{IndexError, IndexResult};
use crate::kdtree::KdTree;
use labtree_core::{Lab, PaletteEntry, Rgb, palette_from_rgb, rgb_to_lab};
use log::debug;

/// Options for [`PaletteMatcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Palettes with fewer entries than this are searched linearly.
    /// 0 always builds a tree.
    pub brute_force_threshold: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            brute_force_threshold: 16,
        }
    }
}

impl MatcherOptions {
    /// Always index the palette, regardless of size
    pub fn always_indexed() -> Self {
        Self {
            brute_force_threshold: 0,
        }
    }

    /// Set the linear-scan threshold
    pub fn with_brute_force_threshold(mut self, threshold: usize) -> Self {
        self.brute_force_threshold = threshold;
        self
    }
}

/// Search strategy selected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Linear scan over all entries
    Linear,
    /// KD-tree descent with pruning
    Indexed,
}

#[derive(Debug, Clone)]
enum Backend<T> {
    Linear(Vec<PaletteEntry<T>>),
    Indexed(KdTree<T>),
}

/// Nearest-color lookup over a fixed palette
#[derive(Debug, Clone)]
pub struct PaletteMatcher<T = Rgb> {
    backend: Backend<T>,
}

impl PaletteMatcher<Rgb> {
    /// Create a matcher with default options
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Rgb]) -> IndexResult<Self> {
        Self::with_options(colors, &MatcherOptions::default())
    }

    /// Create a matcher with explicit options
    pub fn with_options(colors: &[Rgb], options: &MatcherOptions) -> IndexResult<Self> {
        Self::from_entries(palette_from_rgb(colors), options)
    }
}

impl<T> PaletteMatcher<T> {
    /// Create a matcher over prepared palette entries
    ///
    /// # Errors
    ///
    /// - [`IndexError::EmptyPalette`] if `entries` is empty
    /// - an invalid-argument error if any entry has a non-finite coordinate
    pub fn from_entries(
        entries: Vec<PaletteEntry<T>>,
        options: &MatcherOptions,
    ) -> IndexResult<Self> {
        if entries.is_empty() {
            return Err(IndexError::EmptyPalette);
        }

        let len = entries.len();
        let backend = if len < options.brute_force_threshold {
            for entry in &entries {
                entry.lab().validate()?;
            }
            Backend::Linear(entries)
        } else {
            Backend::Indexed(KdTree::build(entries)?)
        };

        let matcher = Self { backend };
        debug!(
            "palette matcher over {} entries uses {:?} search (threshold {})",
            len,
            matcher.strategy(),
            options.brute_force_threshold
        );
        Ok(matcher)
    }

    /// Strategy chosen for this palette
    pub fn strategy(&self) -> Strategy {
        match self.backend {
            Backend::Linear(_) => Strategy::Linear,
            Backend::Indexed(_) => Strategy::Indexed,
        }
    }

    /// Number of palette entries
    pub fn len(&self) -> usize {
        match &self.backend {
            Backend::Linear(entries) => entries.len(),
            Backend::Indexed(tree) => tree.len(),
        }
    }

    /// Always `false`: a matcher cannot be built from an empty palette
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying tree, if the palette was indexed
    pub fn tree(&self) -> Option<&KdTree<T>> {
        match &self.backend {
            Backend::Linear(_) => None,
            Backend::Indexed(tree) => Some(tree),
        }
    }

    /// Nearest palette entry to a LAB color
    pub fn nearest_lab(&self, query: Lab) -> IndexResult<&PaletteEntry<T>> {
        match &self.backend {
            Backend::Linear(entries) => nearest_brute_force(query, entries),
            Backend::Indexed(tree) => tree.nearest_neighbor(query),
        }
    }

    /// Nearest palette entry to a device color
    pub fn nearest_rgb(&self, color: Rgb) -> IndexResult<&PaletteEntry<T>> {
        self.nearest_lab(rgb_to_lab(color))
    }

    /// The `k` nearest palette entries to a LAB color, nearest first
    pub fn k_nearest_lab(&self, query: Lab, k: usize) -> IndexResult<Vec<&PaletteEntry<T>>> {
        match &self.backend {
            Backend::Linear(entries) => k_nearest_brute_force(query, entries, k),
            Backend::Indexed(tree) => tree.k_nearest_neighbors(query, k),
        }
    }
}
