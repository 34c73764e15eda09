//! Color space conversion
//!
//! Provides the three color representations used by the index and the
//! conversions between them:
//! - RGB -> XYZ -> LAB (the comparison path)
//! - LAB -> XYZ -> RGB (back to a device color)
//!
//! All formulas use the sRGB primaries and the D65/2° reference white.

use crate::error::{Error, Result};

/// D65/2° reference white, X component
pub const WHITE_X: f32 = 95.047;
/// D65/2° reference white, Y component
pub const WHITE_Y: f32 = 100.000;
/// D65/2° reference white, Z component
pub const WHITE_Z: f32 = 108.883;

/// Ratio below which the CIE lightness function switches to its linear segment
const LAB_EPSILON: f32 = 0.008856;
/// Slope of the linear segment of the CIE lightness function
const LAB_KAPPA: f32 = 7.787;
const LAB_OFFSET: f32 = 16.0 / 116.0;

/// sRGB gamma threshold on the encoded side
const SRGB_ENCODED_KNEE: f32 = 0.04045;
/// sRGB gamma threshold on the linear side
const SRGB_LINEAR_KNEE: f32 = 0.003_130_8;

/// Device RGB color with 8-bit channels
///
/// Channels are constrained to [0, 255] by the type. Use [`Rgb::from_ints`]
/// to validate wider integers coming from an upstream decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from unchecked integer channels.
    ///
    /// Out-of-range channels are rejected rather than clamped so that
    /// upstream bugs are not masked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any channel is outside [0, 255].
    pub fn from_ints(r: i32, g: i32, b: i32) -> Result<Self> {
        let channel = |name: &str, value: i32| {
            u8::try_from(value).map_err(|_| {
                Error::InvalidArgument(format!(
                    "{name} channel must be in [0, 255], got {value}"
                ))
            })
        };
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }

    /// Channels as a tuple
    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// CIE XYZ tristimulus value (D65 illuminant, percentage scale)
///
/// Only an intermediate of the conversion pipeline; never compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    /// Create a new XYZ color
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// CIE L*a*b* color representation
///
/// - `l`: Lightness in range [0.0, 100.0]
/// - `a`: Green-Red component, typically [-128, 127]
/// - `b`: Blue-Yellow component, typically [-128, 127]
///
/// `PartialEq` compares exact bits and exists for tests; nearness is always
/// decided through [`distance`](crate::distance::distance).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    /// Create a new LAB color
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Coordinate along one axis
    #[inline]
    pub fn component(&self, axis: Axis) -> f32 {
        match axis {
            Axis::L => self.l,
            Axis::A => self.a,
            Axis::B => self.b,
        }
    }

    /// Check whether all three components are finite
    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }

    /// Reject NaN or infinite components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the first offending component.
    pub fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            let value = self.component(axis);
            if !value.is_finite() {
                return Err(Error::InvalidArgument(format!(
                    "LAB component {} must be finite, got {value}",
                    axis.name()
                )));
            }
        }
        Ok(())
    }
}

/// LAB coordinate axis, used as the splitting dimension of the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Lightness
    L,
    /// Green-Red
    A,
    /// Blue-Yellow
    B,
}

impl Axis {
    /// All axes in cycling order
    pub const ALL: [Axis; 3] = [Axis::L, Axis::A, Axis::B];

    /// Axis used at a given tree depth (`depth mod 3`)
    pub fn for_depth(depth: usize) -> Self {
        Self::ALL[depth % 3]
    }

    /// The axis that follows this one in the cycle
    pub fn next(self) -> Self {
        match self {
            Axis::L => Axis::A,
            Axis::A => Axis::B,
            Axis::B => Axis::L,
        }
    }

    /// Axis position: 0 for l, 1 for a, 2 for b
    pub fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Axis::L => "l",
            Axis::A => "a",
            Axis::B => "b",
        }
    }
}

#[inline]
fn srgb_to_linear(channel: u8) -> f32 {
    let v = f32::from(channel) / 255.0;
    if v > SRGB_ENCODED_KNEE {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

#[inline]
fn linear_to_srgb(v: f32) -> u8 {
    let encoded = if v > SRGB_LINEAR_KNEE {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * v
    };
    (encoded * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA * t + LAB_OFFSET
    }
}

#[inline]
fn lab_f_inv(t: f32) -> f32 {
    let cube = t * t * t;
    if cube > LAB_EPSILON {
        cube
    } else {
        (t - LAB_OFFSET) / LAB_KAPPA
    }
}

/// Convert RGB to CIE XYZ (D65 illuminant, sRGB color space)
///
/// Channels are linearized with the sRGB inverse gamma curve, scaled to the
/// percentage range and multiplied by the sRGB-to-XYZ matrix.
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let r = srgb_to_linear(rgb.r) * 100.0;
    let g = srgb_to_linear(rgb.g) * 100.0;
    let b = srgb_to_linear(rgb.b) * 100.0;

    Xyz {
        x: r * 0.4124 + g * 0.3576 + b * 0.1805,
        y: r * 0.2126 + g * 0.7152 + b * 0.0722,
        z: r * 0.0193 + g * 0.1192 + b * 0.9505,
    }
}

/// Convert CIE XYZ to CIE L*a*b*
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / WHITE_X);
    let fy = lab_f(xyz.y / WHITE_Y);
    let fz = lab_f(xyz.z / WHITE_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert RGB to CIE L*a*b*
///
/// This is the single entry point for turning palette and query colors into
/// comparison space.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Convert CIE L*a*b* to CIE XYZ
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    Xyz {
        x: lab_f_inv(fx) * WHITE_X,
        y: lab_f_inv(fy) * WHITE_Y,
        z: lab_f_inv(fz) * WHITE_Z,
    }
}

/// Convert CIE XYZ to RGB (D65 illuminant, sRGB color space)
///
/// Out-of-gamut values are clamped to [0, 255] per channel.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let x = xyz.x / 100.0;
    let y = xyz.y / 100.0;
    let z = xyz.z / 100.0;

    let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
    let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
    let b = x * 0.0557 + y * -0.2040 + z * 1.0570;

    Rgb::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

/// Convert CIE L*a*b* to RGB
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}
