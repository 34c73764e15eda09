//! labtree-test - Regression test framework for labtree
//!
//! Provides [`RegParams`], a small harness that numbers each comparison,
//! records every failure instead of stopping at the first one, and reports a
//! summary at the end of a test, plus deterministic palette and query
//! [`fixtures`].
//!
//! # Usage
//!
//! ```ignore
//! use labtree_test::RegParams;
//!
//! let mut rp = RegParams::new("kdtree");
//! rp.compare_values(oracle_distance as f64, tree_distance as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{
    PICO8_HEX, cube_corners, grayscale_ramp, parse_hex_palette, pico8_palette, random_palette,
    random_queries, random_rgb,
};
pub use params::{RegParams, RegTestMode};
