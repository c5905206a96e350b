//! Rounding and hashing helpers.

use nalgebra::Vector2;

/// Round both coordinates to `digits` decimal digits.
pub fn round_point(p: Vector2<f64>, digits: u32) -> Vector2<f64> {
    let scale = 10f64.powi(digits as i32);
    Vector2::new(round_to(p.x, scale), round_to(p.y, scale))
}

#[inline]
fn round_to(v: f64, scale: f64) -> f64 {
    // + 0.0 folds -0.0 into 0.0
    (v * scale).round() / scale + 0.0
}

/// Bit pattern used for structural hashing; `-0.0` and `0.0` share a key.
#[inline]
pub(crate) fn key_bits(v: f64) -> u64 {
    (v + 0.0).to_bits()
}
