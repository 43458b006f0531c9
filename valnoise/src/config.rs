//! Parameters for fractal value noise, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::noise::fractal;

/// Configuration for a fractal value noise field.
///
/// Missing fields in a JSON document fall back to [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParameters {
    /// Identifies the noise field; equal seeds give identical fields.
    pub seed: i32,
    /// Number of octaves summed (1-8 typical).
    pub octaves: u32,
    /// Coordinate divisor of the first octave; larger values stretch the field.
    pub frequency: f64,
    /// Scale applied to the summed octaves.
    pub amplitude: f64,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            frequency: 32.0,
            amplitude: 1.0,
        }
    }
}

impl NoiseParameters {
    /// Create new noise parameters.
    #[must_use]
    pub const fn new(seed: i32, octaves: u32, frequency: f64, amplitude: f64) -> Self {
        Self {
            seed,
            octaves,
            frequency,
            amplitude,
        }
    }

    /// Default parameters with the given seed.
    #[must_use]
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Broad, rolling heightmap parameters.
    #[must_use]
    pub const fn terrain(seed: i32) -> Self {
        Self::new(seed, 6, 64.0, 1.0)
    }

    /// Short-wavelength, low-amplitude parameters for surface variation.
    #[must_use]
    pub const fn detail(seed: i32) -> Self {
        Self::new(seed, 3, 8.0, 0.25)
    }

    /// Parses and validates parameters from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, NoiseError> {
        let params: Self = serde_json::from_str(json)?;
        if let Err(err) = params.validate() {
            tracing::warn!(%err, "Rejected noise parameters");
            return Err(err);
        }
        Ok(params)
    }

    /// Checks that frequency is a finite, non-zero normal float, amplitude is finite and
    /// the octave count is within [`MAX_OCTAVES`](crate::MAX_OCTAVES).
    pub fn validate(&self) -> Result<(), NoiseError> {
        fractal::validate(i64::from(self.octaves), self.frequency, self.amplitude)
    }

    /// Upper bound on the magnitude of any value produced with these parameters.
    #[must_use]
    pub fn max_magnitude(&self) -> f64 {
        if self.octaves == 0 {
            return 0.0;
        }
        let octaves = self.octaves.min(crate::MAX_OCTAVES) as i32;
        self.amplitude.abs() * (2.0 - 2f64.powi(1 - octaves))
    }
}
