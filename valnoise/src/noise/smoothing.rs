//! Neighbor smoothing over the lattice.
//!
//! A fixed symmetric low-pass filter: each lattice value is blended with its
//! immediate neighbors, weighted center > edge > corner. Weights are powers of
//! two summing to exactly one, so the `[-1, 1]` bound of the hash carries over
//! and the filtered values stay exact dyadic rationals.

use super::lattice::{hash_1d, hash_2d};

/// Weight of the center point in 1D smoothing.
pub const CENTER_WEIGHT_1D: f64 = 0.5;
/// Weight of each of the two 1D neighbors.
pub const NEIGHBOR_WEIGHT_1D: f64 = 0.25;

/// Weight of the center point in 2D smoothing.
pub const CENTER_WEIGHT_2D: f64 = 0.25;
/// Weight of each of the four edge-adjacent neighbors.
pub const EDGE_WEIGHT_2D: f64 = 0.125;
/// Weight of each of the four diagonal neighbors.
pub const CORNER_WEIGHT_2D: f64 = 0.0625;

/// Smoothed lattice value at `x`: half the center plus a quarter of each neighbor.
#[inline]
#[must_use]
pub const fn smooth_1d(x: i32, seed: i32) -> f64 {
    hash_1d(x, seed) * CENTER_WEIGHT_1D
        + hash_1d(x.wrapping_sub(1), seed) * NEIGHBOR_WEIGHT_1D
        + hash_1d(x.wrapping_add(1), seed) * NEIGHBOR_WEIGHT_1D
}

/// Smoothed lattice value at `(x, y)` over the surrounding 3x3 neighborhood.
#[inline]
#[must_use]
pub const fn smooth_2d(x: i32, y: i32, seed: i32) -> f64 {
    let left = x.wrapping_sub(1);
    let right = x.wrapping_add(1);
    let down = y.wrapping_sub(1);
    let up = y.wrapping_add(1);

    let corners = (hash_2d(left, down, seed)
        + hash_2d(right, down, seed)
        + hash_2d(left, up, seed)
        + hash_2d(right, up, seed))
        * CORNER_WEIGHT_2D;
    let edges = (hash_2d(left, y, seed)
        + hash_2d(right, y, seed)
        + hash_2d(x, down, seed)
        + hash_2d(x, up, seed))
        * EDGE_WEIGHT_2D;

    corners + edges + hash_2d(x, y, seed) * CENTER_WEIGHT_2D
}
