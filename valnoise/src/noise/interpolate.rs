//! Cosine-eased interpolation.

use std::f64::consts::PI;

/// Blends `a` toward `b` by `t` along a cosine ease curve.
///
/// The ease weight is `(1 - cos(t * PI)) / 2`, whose derivative vanishes at
/// `t = 0` and `t = 1`, so chained segments meet without a visible crease.
/// `t` is nominally in `[0, 1]` but is not checked.
#[inline]
#[must_use]
pub fn cosine_interpolate(a: f64, b: f64, t: f64) -> f64 {
    let weight = (1.0 - (t * PI).cos()) * 0.5;
    a * (1.0 - weight) + b * weight
}
