//! Errors reported when noise parameters are outside their valid domain.

use thiserror::Error;

/// An error that can occur when configuring or sampling fractal noise.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NoiseError {
    /// Frequency was zero, subnormal, NaN or infinite.
    #[error("Frequency must be a finite, non-zero normal value, got {0}")]
    InvalidFrequency(f64),
    /// A coordinate left the `i32` lattice range once scaled for the highest octave.
    #[error("Coordinate {0} is out of range for the requested octaves and frequency")]
    CoordinateOutOfRange(f64),
    /// Amplitude was NaN or infinite.
    #[error("Amplitude must be finite, got {0}")]
    InvalidAmplitude(f64),
    /// More octaves were requested than the doubling gain can represent.
    #[error("Octave count {octaves} exceeds the maximum of {max}")]
    TooManyOctaves {
        /// The requested octave count.
        octaves: i64,
        /// The largest supported octave count.
        max: u32,
    },
    /// A raster with no cells was requested.
    #[error("Grid dimensions must be non-zero, got {width}x{height}")]
    InvalidGrid {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },
    /// A parameter document could not be parsed.
    #[error("Failed to parse noise parameters: {0}")]
    Config(#[from] serde_json::Error),
}
