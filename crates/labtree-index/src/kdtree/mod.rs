//! KdTree - Balanced 3-D tree over a palette in CIELAB
//!
//! The tree is built once from a non-empty palette and never changes
//! afterwards. Every node holds exactly one palette entry; the splitting
//! axis cycles l, a, b with depth, and each split takes the exact median of
//! its subset so the tree is height-balanced.
//!
//! Children are owned by their parent through `Box`. Queries use plain
//! recursive descent, so nodes carry no parent link.

mod search;

use crate::error::{IndexError, IndexResult};
use labtree_core::{Axis, PaletteEntry, Rgb, palette_from_rgb};
use log::debug;
use std::cmp::Ordering;

/// One node of a [`KdTree`]
#[derive(Debug, Clone)]
pub struct KdNode<T = Rgb> {
    entry: PaletteEntry<T>,
    axis: Axis,
    left: Option<Box<KdNode<T>>>,
    right: Option<Box<KdNode<T>>>,
}

impl<T> KdNode<T> {
    /// The palette entry stored at this node
    pub fn entry(&self) -> &PaletteEntry<T> {
        &self.entry
    }

    /// Axis this node splits on
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Split value: the entry's coordinate along [`axis`](Self::axis)
    pub fn split_value(&self) -> f32 {
        self.entry.lab().component(self.axis)
    }

    /// Subtree with coordinates at or below the split value
    pub fn left(&self) -> Option<&KdNode<T>> {
        self.left.as_deref()
    }

    /// Subtree with coordinates at or above the split value
    pub fn right(&self) -> Option<&KdNode<T>> {
        self.right.as_deref()
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height() + 1);
        let right = self.right.as_ref().map_or(0, |n| n.height() + 1);
        left.max(right)
    }
}

/// Immutable KD-tree handle over a palette
///
/// Holds no interior mutability, so a built tree can be shared between
/// threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct KdTree<T = Rgb> {
    root: Box<KdNode<T>>,
    len: usize,
}

impl KdTree<Rgb> {
    /// Build a tree directly from device colors.
    ///
    /// Entry `i` of the tree refers to `colors[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EmptyPalette`] if `colors` is empty.
    pub fn from_rgb(colors: &[Rgb]) -> IndexResult<Self> {
        Self::build(palette_from_rgb(colors))
    }
}

impl<T> KdTree<T> {
    /// Build a balanced tree from palette entries.
    ///
    /// At depth `d` the entries are split on axis `d mod 3` around their
    /// exact median. Entries are ordered by coordinate and then by palette
    /// index, so entries sharing the median coordinate straddle the split
    /// deterministically.
    ///
    /// # Errors
    ///
    /// - [`IndexError::EmptyPalette`] if `entries` is empty
    /// - an invalid-argument error if any entry has a non-finite coordinate
    pub fn build(entries: Vec<PaletteEntry<T>>) -> IndexResult<Self> {
        for entry in &entries {
            entry.lab().validate()?;
        }
        let len = entries.len();
        let root = build_node(entries, Axis::L).ok_or(IndexError::EmptyPalette)?;
        let tree = Self { root, len };

        debug!(
            "built kd-tree over {} palette entries, height {}",
            tree.len,
            tree.height()
        );
        Ok(tree)
    }

    /// Number of palette entries in the tree
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a tree cannot be built from an empty palette
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Root node
    pub fn root(&self) -> &KdNode<T> {
        &self.root
    }

    /// Number of edges on the longest root-to-leaf path.
    ///
    /// A single-entry tree has height 0; `n` entries give `floor(log2 n)`.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Iterate over all entries in pre-order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![&*self.root],
        }
    }

    /// All entries, sorted by their palette index
    pub fn entries_in_palette_order(&self) -> Vec<&PaletteEntry<T>> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|e| e.index());
        entries
    }
}

impl<'a, T> IntoIterator for &'a KdTree<T> {
    type Item = &'a PaletteEntry<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over the entries of a [`KdTree`]
pub struct Iter<'a, T> {
    stack: Vec<&'a KdNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a PaletteEntry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(&node.entry)
    }
}

fn compare_along<T>(axis: Axis, x: &PaletteEntry<T>, y: &PaletteEntry<T>) -> Ordering {
    x.lab()
        .component(axis)
        .total_cmp(&y.lab().component(axis))
        .then_with(|| x.index().cmp(&y.index()))
}

/// Recursively partition `entries` around the median along `axis`.
///
/// Returns `None` only for an empty subset.
fn build_node<T>(mut entries: Vec<PaletteEntry<T>>, axis: Axis) -> Option<Box<KdNode<T>>> {
    if entries.is_empty() {
        return None;
    }

    let mid = entries.len() / 2;
    entries.select_nth_unstable_by(mid, |x, y| compare_along(axis, x, y));

    // [0, mid) <= median <= (mid, len)
    let upper = entries.split_off(mid + 1);
    let entry = entries.pop()?;
    let next = axis.next();

    Some(Box::new(KdNode {
        entry,
        axis,
        left: build_node(entries, next),
        right: build_node(upper, next),
    }))
}
