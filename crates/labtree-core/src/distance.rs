//! Distance metrics over CIELAB points
//!
//! [`squared_distance`] is the ranking key used on hot paths; [`distance`]
//! is the only value in LAB units ever reported to a caller.

use crate::colorspace::Lab;

/// Sum of squared per-channel differences.
///
/// Orders points exactly like [`distance`] but skips the square root. The
/// result is in squared LAB units and must not be presented as a distance.
#[inline]
pub fn squared_distance(p: Lab, q: Lab) -> f32 {
    let dl = p.l - q.l;
    let da = p.a - q.a;
    let db = p.b - q.b;
    dl * dl + da * da + db * db
}

/// Euclidean distance between two LAB points (CIE76 ΔE)
#[inline]
pub fn distance(p: Lab, q: Lab) -> f32 {
    squared_distance(p, q).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_to_self() {
        let p = Lab::new(42.0, -12.5, 77.0);
        assert_eq!(distance(p, p), 0.0);
        assert_eq!(squared_distance(p, p), 0.0);
    }

    #[test]
    fn test_pythagorean_triple() {
        let p = Lab::new(0.0, 0.0, 0.0);
        let q = Lab::new(3.0, 4.0, 12.0);
        assert_eq!(squared_distance(p, q), 169.0);
        assert_eq!(distance(p, q), 13.0);
    }

    #[test]
    fn test_symmetric() {
        let p = Lab::new(10.0, 20.0, -30.0);
        let q = Lab::new(-5.0, 1.5, 9.25);
        assert_eq!(distance(p, q), distance(q, p));
        assert_eq!(squared_distance(p, q), squared_distance(q, p));
    }

    #[test]
    fn test_nan_propagates() {
        let p = Lab::new(f32::NAN, 0.0, 0.0);
        assert!(distance(p, Lab::default()).is_nan());
    }
}
