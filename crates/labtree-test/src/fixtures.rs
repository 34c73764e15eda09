//! Deterministic palettes and query points for tests and benchmarks

use crate::error::{TestError, TestResult};
use labtree_core::{Lab, Rgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The 16-color PICO-8 palette
pub const PICO8_HEX: &str = "#000000 #1d2b53 #7e2553 #008751 #ab5236 #5f574f #c2c3c7 #fff1e8 \
                             #ff004d #ffa300 #ffec27 #00e436 #29adff #83769c #ff77a8 #ffccaa";

/// The eight corners of the RGB cube, black first and white last
pub fn cube_corners() -> Vec<Rgb> {
    let mut corners = Vec::with_capacity(8);
    for bits in 0u8..8 {
        let level = |bit: u8| if bits & bit != 0 { 255 } else { 0 };
        corners.push(Rgb::new(level(4), level(2), level(1)));
    }
    corners
}

/// Evenly spaced grays from black to white
///
/// # Errors
///
/// Returns [`TestError::InvalidSize`] unless `steps` is in [2, 256].
pub fn grayscale_ramp(steps: usize) -> TestResult<Vec<Rgb>> {
    if !(2..=256).contains(&steps) {
        return Err(TestError::InvalidSize(format!(
            "grayscale ramp needs 2..=256 steps, got {steps}"
        )));
    }
    Ok((0..steps)
        .map(|i| {
            let v = (i * 255 / (steps - 1)) as u8;
            Rgb::new(v, v, v)
        })
        .collect())
}

/// Parse a whitespace-separated list of `#rrggbb` colors
pub fn parse_hex_palette(text: &str) -> TestResult<Vec<Rgb>> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            let invalid = || TestError::InvalidHex {
                token: token.to_string(),
                position,
            };
            let hex = token.strip_prefix('#').ok_or_else(invalid)?;
            if hex.len() != 6 {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            Ok(Rgb::new(
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            ))
        })
        .collect()
}

/// The PICO-8 palette as RGB colors
pub fn pico8_palette() -> Vec<Rgb> {
    // The constant is well-formed, so parsing cannot fail.
    parse_hex_palette(PICO8_HEX).unwrap_or_default()
}

/// One random RGB color
pub fn random_rgb<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// A reproducible random palette of `len` colors
///
/// Small channel sets are mixed in so that duplicates and shared
/// coordinates along single axes show up regularly.
pub fn random_palette(seed: u64, len: usize) -> Vec<Rgb> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if rng.random_bool(0.2) {
                let level = |rng: &mut StdRng| [0u8, 64, 128, 255][rng.random_range(0..4)];
                Rgb::new(level(&mut rng), level(&mut rng), level(&mut rng))
            } else {
                random_rgb(&mut rng)
            }
        })
        .collect()
}

/// Reproducible random query points spread over the LAB volume
pub fn random_queries(seed: u64, len: usize) -> Vec<Lab> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            Lab::new(
                rng.random_range(0.0..=100.0),
                rng.random_range(-128.0..=127.0),
                rng.random_range(-128.0..=127.0),
            )
        })
        .collect()
}
