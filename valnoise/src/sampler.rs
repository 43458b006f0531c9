//! Sampler bound to a validated parameter set.

use glam::DVec2;

use crate::config::NoiseParameters;
use crate::error::NoiseError;
use crate::noise::fractal::{check_coordinate, fbm_1d, fbm_2d};

/// Fractal value noise with validated parameters.
///
/// Sampling matches [`value_1d`](crate::value_1d) / [`value_2d`](crate::value_2d)
/// bit for bit but skips their per-call coordinate check. Coordinates must
/// satisfy `|coord| * 2^(octaves - 1) / |frequency| < 2^31`, keeping the
/// highest octave inside the `i32` lattice; outside it samples may be NaN.
/// Use [`ValueNoise::check_coordinate`] to test a coordinate up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueNoise {
    params: NoiseParameters,
}

impl ValueNoise {
    /// Create a new sampler, validating the parameters.
    pub fn new(params: NoiseParameters) -> Result<Self, NoiseError> {
        params.validate()?;
        tracing::debug!(
            seed = params.seed,
            octaves = params.octaves,
            frequency = params.frequency,
            amplitude = params.amplitude,
            "Value noise sampler created"
        );
        Ok(Self { params })
    }

    /// The parameters this sampler was built with.
    #[must_use]
    pub const fn params(&self) -> &NoiseParameters {
        &self.params
    }

    /// Checks that `coord` is within this sampler's coordinate range.
    pub fn check_coordinate(&self, coord: f64) -> Result<(), NoiseError> {
        let p = &self.params;
        check_coordinate(coord, p.octaves as i32, p.frequency)
    }

    /// Sample the 1D field at `x`.
    #[inline]
    #[must_use]
    pub fn sample_1d(&self, x: f64) -> f64 {
        let p = &self.params;
        fbm_1d(x, p.seed, p.octaves, p.frequency, p.amplitude)
    }

    /// Sample the 2D field at `(x, y)`.
    #[inline]
    #[must_use]
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let p = &self.params;
        fbm_2d(x, y, p.seed, p.octaves, p.frequency, p.amplitude)
    }

    /// Sample the 2D field at a point.
    #[inline]
    #[must_use]
    pub fn sample(&self, pos: DVec2) -> f64 {
        self.sample_2d(pos.x, pos.y)
    }
}

impl TryFrom<NoiseParameters> for ValueNoise {
    type Error = NoiseError;

    fn try_from(params: NoiseParameters) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}
