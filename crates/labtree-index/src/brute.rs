//! Brute-force nearest-color search
//!
//! A single linear scan over the palette. It is the ground truth the KD-tree
//! is checked against, and the strategy [`PaletteMatcher`](crate::PaletteMatcher)
//! falls back to for palettes too small to be worth indexing.

use crate::candidate::Candidate;
use crate::error::{IndexError, IndexResult};
use labtree_core::{Lab, PaletteEntry};

/// Find the palette entry nearest to `query`.
///
/// Every entry is compared once. Ties resolve to the entry with the lowest
/// palette index, which for palettes built by
/// [`palette_from_rgb`](labtree_core::palette_from_rgb) is the first one in
/// palette order.
///
/// # Errors
///
/// - [`IndexError::EmptyPalette`] if `palette` is empty
/// - an invalid-argument error if `query` has a non-finite component
pub fn nearest_brute_force<T>(
    query: Lab,
    palette: &[PaletteEntry<T>],
) -> IndexResult<&PaletteEntry<T>> {
    query.validate()?;
    palette
        .iter()
        .map(|entry| Candidate::new(query, entry))
        .min()
        .map(|best| best.entry)
        .ok_or(IndexError::EmptyPalette)
}

/// Find the `k` palette entries nearest to `query`, nearest first.
///
/// `k` larger than the palette returns every entry. Ranking uses the same
/// key as [`nearest_brute_force`].
///
/// # Errors
///
/// - [`IndexError::EmptyPalette`] if `palette` is empty
/// - [`IndexError::InvalidArgument`] if `k == 0`
/// - an invalid-argument error if `query` has a non-finite component
pub fn k_nearest_brute_force<T>(
    query: Lab,
    palette: &[PaletteEntry<T>],
    k: usize,
) -> IndexResult<Vec<&PaletteEntry<T>>> {
    if k == 0 {
        return Err(IndexError::InvalidArgument("k must be at least 1".into()));
    }
    query.validate()?;
    if palette.is_empty() {
        return Err(IndexError::EmptyPalette);
    }

    let mut ranked: Vec<Candidate<'_, T>> = palette
        .iter()
        .map(|entry| Candidate::new(query, entry))
        .collect();
    ranked.sort_unstable();
    ranked.truncate(k);
    Ok(ranked.into_iter().map(|c| c.entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labtree_core::{Rgb, distance, palette_from_rgb, rgb_to_lab};

    #[test]
    fn test_empty_palette() {
        let palette: Vec<PaletteEntry> = Vec::new();
        assert_eq!(
            nearest_brute_force(Lab::default(), &palette),
            Err(IndexError::EmptyPalette)
        );
        assert_eq!(
            k_nearest_brute_force(Lab::default(), &palette, 1),
            Err(IndexError::EmptyPalette)
        );
    }

    #[test]
    fn test_single_entry_always_wins() {
        let palette = palette_from_rgb(&[Rgb::new(255, 0, 0)]);
        let blue = rgb_to_lab(Rgb::new(0, 0, 255));
        let best = nearest_brute_force(blue, &palette).unwrap();
        assert_eq!(best.rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_picks_minimum() {
        let palette = palette_from_rgb(&[
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(250, 10, 10),
        ]);
        let query = rgb_to_lab(Rgb::new(200, 30, 30));
        assert_eq!(nearest_brute_force(query, &palette).unwrap().index(), 2);
    }

    #[test]
    fn test_ties_resolve_to_first() {
        let gray = Rgb::new(90, 90, 90);
        let palette = palette_from_rgb(&[Rgb::new(0, 0, 0), gray, gray]);
        let best = nearest_brute_force(rgb_to_lab(gray), &palette).unwrap();
        assert_eq!(best.index(), 1);
    }

    #[test]
    fn test_rejects_nan_query() {
        let palette = palette_from_rgb(&[Rgb::new(1, 2, 3)]);
        let err = nearest_brute_force(Lab::new(f32::NAN, 0.0, 0.0), &palette).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_k_nearest_sorted_and_clamped() {
        let palette = palette_from_rgb(&[
            Rgb::new(0, 0, 0),
            Rgb::new(60, 60, 60),
            Rgb::new(120, 120, 120),
            Rgb::new(255, 255, 255),
        ]);
        let query = rgb_to_lab(Rgb::new(70, 70, 70));
        let all = k_nearest_brute_force(query, &palette, 100).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].index(), 1);
        for pair in all.windows(2) {
            assert!(distance(query, pair[0].lab()) <= distance(query, pair[1].lab()));
        }
        assert!(matches!(
            k_nearest_brute_force(query, &palette, 0),
            Err(IndexError::InvalidArgument(_))
        ));
    }
}
