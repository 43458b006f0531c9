//! Continuous single-octave sampling between smoothed lattice points.

use super::interpolate::cosine_interpolate;
use super::smoothing::{smooth_1d, smooth_2d};
use crate::math::split;

/// Samples continuous 1D noise at `x`.
///
/// Reproduces [`smooth_1d`] exactly at integer `x` and eases between adjacent
/// lattice points elsewhere. The result stays within `[-1, 1]`.
#[inline]
#[must_use]
pub fn sample_1d(x: f64, seed: i32) -> f64 {
    let (ix, fx) = split(x);
    let left = smooth_1d(ix, seed);
    let right = smooth_1d(ix.wrapping_add(1), seed);
    cosine_interpolate(left, right, fx)
}

/// Samples continuous 2D noise at `(x, y)`.
///
/// Interpolates the bottom and top edges of the enclosing lattice cell along
/// `x`, then blends the two edge values along `y`.
#[inline]
#[must_use]
pub fn sample_2d(x: f64, y: f64, seed: i32) -> f64 {
    let (ix, fx) = split(x);
    let (iy, fy) = split(y);
    let ix1 = ix.wrapping_add(1);
    let iy1 = iy.wrapping_add(1);

    let bottom = cosine_interpolate(smooth_2d(ix, iy, seed), smooth_2d(ix1, iy, seed), fx);
    let top = cosine_interpolate(smooth_2d(ix, iy1, seed), smooth_2d(ix1, iy1, seed), fx);
    cosine_interpolate(bottom, top, fy)
}
