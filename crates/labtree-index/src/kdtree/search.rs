//! Nearest-neighbor queries on a [`KdTree`]
//!
//! Both queries descend to the query's side of each splitting plane first,
//! then visit the far side only if the plane is no farther than the current
//! worst kept candidate. Ranking uses squared distance with the palette
//! index as tie-breaker, exactly like the brute-force oracle.

use super::{KdNode, KdTree};
use crate::candidate::Candidate;
use crate::error::{IndexError, IndexResult};
use labtree_core::{Lab, PaletteEntry};
use std::collections::BinaryHeap;

impl<T> KdTree<T> {
    /// Find the palette entry nearest to `query`.
    ///
    /// Returns the same entry as
    /// [`nearest_brute_force`](crate::nearest_brute_force) over the same
    /// palette, including on ties.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `query` has a non-finite
    /// component.
    pub fn nearest_neighbor(&self, query: Lab) -> IndexResult<&PaletteEntry<T>> {
        query.validate()?;
        let mut best = Candidate::new(query, &self.root.entry);
        nearest_in(&self.root, query, &mut best);
        Ok(best.entry)
    }

    /// Find the `k` palette entries nearest to `query`, nearest first.
    ///
    /// `k` is clamped to the number of entries, so asking for more than the
    /// palette holds returns every entry sorted by distance. Entries with
    /// identical coordinates are returned separately.
    ///
    /// # Errors
    ///
    /// - [`IndexError::InvalidArgument`] if `k == 0`
    /// - an invalid-argument error if `query` has a non-finite component
    pub fn k_nearest_neighbors(
        &self,
        query: Lab,
        k: usize,
    ) -> IndexResult<Vec<&PaletteEntry<T>>> {
        if k == 0 {
            return Err(IndexError::InvalidArgument("k must be at least 1".into()));
        }
        query.validate()?;

        let k = k.min(self.len);
        let mut kept = BinaryHeap::with_capacity(k);
        k_nearest_in(&self.root, query, k, &mut kept);

        Ok(kept.into_sorted_vec().into_iter().map(|c| c.entry).collect())
    }

    /// Resolve a batch of queries, one nearest entry per query.
    ///
    /// # Errors
    ///
    /// Fails on the first query with a non-finite component.
    pub fn nearest_batch(&self, queries: &[Lab]) -> IndexResult<Vec<&PaletteEntry<T>>> {
        queries.iter().map(|&q| self.nearest_neighbor(q)).collect()
    }
}

/// Signed offset of `query` from the node's splitting plane
#[inline]
fn plane_offset<T>(node: &KdNode<T>, query: Lab) -> f32 {
    query.component(node.axis) - node.split_value()
}

fn nearest_in<'a, T>(node: &'a KdNode<T>, query: Lab, best: &mut Candidate<'a, T>) {
    let offset = plane_offset(node, query);
    let (near, far) = if offset <= 0.0 {
        (node.left(), node.right())
    } else {
        (node.right(), node.left())
    };

    if let Some(child) = near {
        nearest_in(child, query, best);
    }

    let here = Candidate::new(query, &node.entry);
    if here < *best {
        *best = here;
    }

    // Equality still crosses: an equidistant entry may have a lower index.
    if let Some(child) = far
        && offset * offset <= best.dist_sq
    {
        nearest_in(child, query, best);
    }
}

fn k_nearest_in<'a, T>(
    node: &'a KdNode<T>,
    query: Lab,
    k: usize,
    kept: &mut BinaryHeap<Candidate<'a, T>>,
) {
    let offset = plane_offset(node, query);
    let (near, far) = if offset <= 0.0 {
        (node.left(), node.right())
    } else {
        (node.right(), node.left())
    };

    if let Some(child) = near {
        k_nearest_in(child, query, k, kept);
    }

    offer(kept, k, Candidate::new(query, &node.entry));

    if let Some(child) = far {
        // Until k candidates are held, nothing can be pruned.
        let crosses = kept.len() < k
            || kept
                .peek()
                .is_some_and(|worst| offset * offset <= worst.dist_sq);
        if crosses {
            k_nearest_in(child, query, k, kept);
        }
    }
}

/// Keep `candidate` if fewer than `k` are held or it beats the current worst
fn offer<'a, T>(kept: &mut BinaryHeap<Candidate<'a, T>>, k: usize, candidate: Candidate<'a, T>) {
    if kept.len() < k {
        kept.push(candidate);
    } else if let Some(mut worst) = kept.peek_mut()
        && candidate < *worst
    {
        *worst = candidate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute::{k_nearest_brute_force, nearest_brute_force};
    use labtree_core::{Rgb, distance, palette_from_rgb, rgb_to_lab};

    fn corners() -> Vec<Rgb> {
        let mut out = Vec::new();
        for r in [0, 255] {
            for g in [0, 255] {
                for b in [0, 255] {
                    out.push(Rgb::new(r, g, b));
                }
            }
        }
        out
    }

    #[test]
    fn test_single_entry_tree() {
        let tree = KdTree::from_rgb(&[Rgb::new(255, 0, 0)]).unwrap();
        let best = tree.nearest_neighbor(rgb_to_lab(Rgb::new(0, 0, 255))).unwrap();
        assert_eq!(best.rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_exact_hit() {
        let colors = corners();
        let tree = KdTree::from_rgb(&colors).unwrap();
        for (i, &rgb) in colors.iter().enumerate() {
            assert_eq!(tree.nearest_neighbor(rgb_to_lab(rgb)).unwrap().index(), i);
        }
    }

    #[test]
    fn test_mid_gray_matches_oracle() {
        let palette = palette_from_rgb(&corners());
        let tree = KdTree::build(palette.clone()).unwrap();
        let query = rgb_to_lab(Rgb::new(128, 128, 128));

        let expected = nearest_brute_force(query, &palette).unwrap();
        let actual = tree.nearest_neighbor(query).unwrap();
        assert_eq!(distance(query, expected.lab()), distance(query, actual.lab()));
        assert_eq!(expected.index(), actual.index());
    }

    #[test]
    fn test_k_zero_is_invalid() {
        let tree = KdTree::from_rgb(&corners()).unwrap();
        assert!(matches!(
            tree.k_nearest_neighbors(Lab::default(), 0),
            Err(IndexError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_k_larger_than_palette() {
        let colors: Vec<Rgb> = (0..10u8)
            .map(|i| Rgb::new(i * 25, 200 - i * 20, i * 3))
            .collect();
        let tree = KdTree::from_rgb(&colors).unwrap();
        let query = rgb_to_lab(Rgb::new(100, 100, 100));

        let all = tree.k_nearest_neighbors(query, 1000).unwrap();
        assert_eq!(all.len(), 10);
        for pair in all.windows(2) {
            assert!(distance(query, pair[0].lab()) <= distance(query, pair[1].lab()));
        }
    }

    #[test]
    fn test_duplicates_retrievable() {
        let black = Rgb::new(0, 0, 0);
        let tree = KdTree::from_rgb(&[black, Rgb::new(255, 255, 255), black]).unwrap();
        let found = tree.k_nearest_neighbors(rgb_to_lab(black), 2).unwrap();
        let indices: Vec<usize> = found.iter().map(|e| e.index()).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_k_nearest_matches_oracle() {
        let colors: Vec<Rgb> = (0..64u32)
            .map(|i| {
                let v = i.wrapping_mul(2_654_435_761);
                Rgb::new(v as u8, (v >> 8) as u8, (v >> 16) as u8)
            })
            .collect();
        let palette = palette_from_rgb(&colors);
        let tree = KdTree::build(palette.clone()).unwrap();

        let queries = [
            Lab::new(50.0, 0.0, 0.0),
            Lab::new(10.0, 60.0, -40.0),
            Lab::new(95.0, -20.0, 80.0),
        ];
        for query in queries {
            for k in [1, 2, 5, 17, 64] {
                let expected: Vec<usize> = k_nearest_brute_force(query, &palette, k)
                    .unwrap()
                    .iter()
                    .map(|e| e.index())
                    .collect();
                let actual: Vec<usize> = tree
                    .k_nearest_neighbors(query, k)
                    .unwrap()
                    .iter()
                    .map(|e| e.index())
                    .collect();
                assert_eq!(expected, actual, "query {query:?}, k {k}");
            }
        }
    }

    #[test]
    fn test_nan_query_rejected() {
        let tree = KdTree::from_rgb(&corners()).unwrap();
        let nan = Lab::new(0.0, f32::NAN, 0.0);
        assert!(tree.nearest_neighbor(nan).unwrap_err().is_invalid_argument());
        let inf = Lab::new(f32::INFINITY, 0.0, 0.0);
        let err = tree.k_nearest_neighbors(inf, 3).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_nearest_batch() {
        let colors = corners();
        let tree = KdTree::from_rgb(&colors).unwrap();
        let queries: Vec<Lab> = colors.iter().rev().map(|&c| rgb_to_lab(c)).collect();
        let found = tree.nearest_batch(&queries).unwrap();
        let indices: Vec<usize> = found.iter().map(|e| e.index()).collect();
        assert_eq!(indices, vec![7, 6, 5, 4, 3, 2, 1, 0]);
        assert!(tree.nearest_batch(&[]).unwrap().is_empty());
    }
}
