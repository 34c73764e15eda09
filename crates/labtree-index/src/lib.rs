//! labtree-index - Exact nearest-color search over a fixed palette
//!
//! This crate provides the search structures that map an arbitrary color to
//! its nearest palette entry in CIELAB:
//!
//! - **KD-tree** ([`kdtree`]): balanced 3-D tree with exact nearest and
//!   k-nearest queries
//! - **Brute force** ([`brute`]): linear scan, the reference every tree
//!   result is checked against
//! - **Matcher** ([`matcher`]): palette front end choosing a strategy by
//!   palette size
//! - **Cache** ([`cache`]): caller-owned memo of resolved colors
//!
//! # Example
//!
//! ```
//! use labtree_core::{Rgb, rgb_to_lab};
//! use labtree_index::KdTree;
//!
//! let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 0, 0), Rgb::new(255, 255, 255)];
//! let tree = KdTree::from_rgb(&palette).unwrap();
//! let nearest = tree.nearest_neighbor(rgb_to_lab(Rgb::new(200, 30, 30))).unwrap();
//! assert_eq!(nearest.rgb(), Rgb::new(255, 0, 0));
//! ```

pub mod brute;
pub mod cache;
mod candidate;
pub mod error;
pub mod kdtree;
pub mod matcher;

// Re-export core types
pub use labtree_core;

// Re-export error types
pub use error::{IndexError, IndexResult};

pub use brute::{k_nearest_brute_force, nearest_brute_force};
pub use cache::NearestCache;
pub use kdtree::{Iter, KdNode, KdTree};
pub use matcher::{MatcherOptions, PaletteMatcher, Strategy};
