//! Value noise stages, leaf to root.
//!
//! - [`hash_1d`] / [`hash_2d`] - Lattice hash into `[-1, 1]`
//! - [`cosine_interpolate`] - Cosine-eased blend between two values
//! - [`smooth_1d`] / [`smooth_2d`] - Neighbor low-pass filter over the lattice
//! - [`sample_1d`] / [`sample_2d`] - Continuous single-octave noise
//! - [`value_1d`] / [`value_2d`] - Multi-octave fractal sum
//!
//! Every function here is pure; identical arguments give bit-identical results.

pub(crate) mod fractal;
mod interpolate;
mod lattice;
mod sample;
mod smoothing;

pub use fractal::{MAX_OCTAVES, value_1d, value_2d};
pub use interpolate::cosine_interpolate;
pub use lattice::{LATTICE_Y_STRIDE, hash_1d, hash_2d};
pub use sample::{sample_1d, sample_2d};
pub use smoothing::{
    CENTER_WEIGHT_1D, CENTER_WEIGHT_2D, CORNER_WEIGHT_2D, EDGE_WEIGHT_2D, NEIGHBOR_WEIGHT_1D,
    smooth_1d, smooth_2d,
};
