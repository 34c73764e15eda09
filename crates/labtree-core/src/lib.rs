//! labtree-core - Color model and metrics for palette matching
//!
//! This crate provides the leaf layers that the palette index builds on:
//!
//! - **Color model** ([`colorspace`]): [`Rgb`], [`Xyz`], [`Lab`] and the
//!   conversions RGB -> XYZ -> LAB (plus the inverse path)
//! - **Distance metrics** ([`distance`]): Euclidean distance in LAB and its
//!   squared form used for ranking
//! - **Palette entries** ([`palette`]): LAB coordinates tied back to the
//!   original palette color

pub mod colorspace;
pub mod distance;
pub mod error;
pub mod palette;

pub use colorspace::{
    Axis, Lab, Rgb, WHITE_X, WHITE_Y, WHITE_Z, Xyz, lab_to_rgb, lab_to_xyz, rgb_to_lab,
    rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
};
pub use distance::{distance, squared_distance};
pub use error::{Error, Result};
pub use palette::{PaletteEntry, palette_from_rgb};
