//! Palette entries
//!
//! A [`PaletteEntry`] ties a comparison-space coordinate back to the color
//! (or caller-defined identifier) it was derived from, together with its
//! position in the caller's palette.

use crate::colorspace::{Lab, Rgb, rgb_to_lab};

/// One palette color in comparison space.
///
/// `index` is the entry's position in the caller's palette and is the
/// deterministic tie-breaker whenever two entries are equally near a query.
/// Duplicate coordinates are legal; entries are never deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry<T = Rgb> {
    index: usize,
    lab: Lab,
    value: T,
}

impl<T> PaletteEntry<T> {
    /// Create an entry from an already-converted coordinate and a payload
    pub fn new(index: usize, lab: Lab, value: T) -> Self {
        Self { index, lab, value }
    }

    /// Position in the original palette
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Coordinate used for all comparisons
    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }

    /// Caller payload
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the entry, returning its payload
    pub fn into_value(self) -> T {
        self.value
    }
}

impl PaletteEntry<Rgb> {
    /// Create an entry for a device color, converting it to LAB once
    pub fn from_rgb(index: usize, rgb: Rgb) -> Self {
        Self::new(index, rgb_to_lab(rgb), rgb)
    }

    /// The original device color
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.value
    }
}

/// Convert an ordered list of device colors into palette entries.
///
/// Entry `i` carries index `i`. An empty input yields an empty list; the
/// consumers of the list decide whether that is an error.
pub fn palette_from_rgb(colors: &[Rgb]) -> Vec<PaletteEntry> {
    colors
        .iter()
        .enumerate()
        .map(|(i, &rgb)| PaletteEntry::from_rgb(i, rgb))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_converts_once() {
        let entry = PaletteEntry::from_rgb(3, Rgb::new(255, 0, 0));
        assert_eq!(entry.index(), 3);
        assert_eq!(entry.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(entry.lab(), rgb_to_lab(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_palette_keeps_duplicates_and_order() {
        let black = Rgb::new(0, 0, 0);
        let palette = palette_from_rgb(&[black, Rgb::new(9, 9, 9), black]);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[0].index(), 0);
        assert_eq!(palette[2].index(), 2);
        assert_eq!(palette[0].lab(), palette[2].lab());
    }

    #[test]
    fn test_custom_payload() {
        let entry = PaletteEntry::new(0, Lab::new(50.0, 0.0, 0.0), "mid-gray");
        assert_eq!(*entry.value(), "mid-gray");
        assert_eq!(entry.into_value(), "mid-gray");
    }
}
