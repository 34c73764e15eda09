//! Labtree - Nearest palette color search in CIELAB
//!
//! Maps arbitrary colors to their nearest match in a fixed palette, for
//! image quantization, dithering and palette-constrained rendering.
//!
//! # Overview
//!
//! - Color model and conversion: RGB -> XYZ -> LAB (D65/2°)
//! - Distance metrics: Euclidean distance in LAB and its squared form
//! - Brute-force search: the linear reference implementation
//! - KD-tree: balanced 3-D index with exact nearest and k-nearest queries
//!
//! # Example
//!
//! ```
//! use labtree::{KdTree, Rgb, rgb_to_lab};
//!
//! let palette = [Rgb::new(0, 0, 0), Rgb::new(128, 128, 128), Rgb::new(255, 255, 255)];
//! let tree = KdTree::from_rgb(&palette).unwrap();
//!
//! let query = rgb_to_lab(Rgb::new(100, 110, 120));
//! assert_eq!(tree.nearest_neighbor(query).unwrap().rgb(), Rgb::new(128, 128, 128));
//!
//! let ranked = tree.k_nearest_neighbors(query, 2).unwrap();
//! assert_eq!(ranked.len(), 2);
//! ```

// Re-export core types (color model and metrics used everywhere)
pub use labtree_core::*;

// Re-export index types
pub use labtree_index::{
    IndexError, IndexResult, KdNode, KdTree, MatcherOptions, NearestCache, PaletteMatcher,
    Strategy, k_nearest_brute_force, nearest_brute_force,
};

// Re-export the index crate as a module for everything else
pub use labtree_index as index;
