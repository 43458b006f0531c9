//! Deterministic value noise over 1D and 2D domains.
//!
//! Integer lattice points are hashed to pseudo-random values in `[-1, 1]`,
//! low-pass filtered against their neighbors, cosine-interpolated between
//! lattice points and finally summed over several octaves (fBm).
//!
//! # Key Types
//!
//! - [`value_1d`] / [`value_2d`] - Fractal noise free functions
//! - [`ValueNoise`] - A sampler bound to validated [`NoiseParameters`]
//! - [`NoiseGrid`] - A rasterized 2D field filled in parallel

pub mod config;
pub mod error;
pub mod grid;
pub mod math;
pub mod noise;
pub mod sampler;

pub use config::NoiseParameters;
pub use error::NoiseError;
pub use grid::NoiseGrid;
pub use noise::{MAX_OCTAVES, value_1d, value_2d};
pub use sampler::ValueNoise;
