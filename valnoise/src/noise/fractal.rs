//! Multi-octave fractal Brownian motion (fBm) over value noise.
//!
//! Octave `i` samples at `2^i / frequency` times the input coordinate and
//! contributes `amplitude / 2^i` of its value, i.e. lacunarity 2 and
//! persistence 0.5. The sum is not normalized or clamped; its magnitude is
//! bounded by `|amplitude| * (2 - 2^(1 - octaves))`.

use super::sample::{sample_1d, sample_2d};
use crate::error::NoiseError;

/// Largest supported octave count.
///
/// Keeps the doubling gain exact and, for unit-scale coordinates, the
/// highest octave's lattice indices well inside the `i32` range.
pub const MAX_OCTAVES: u32 = 30;

/// Checks the caller-supplied fractal parameters.
///
/// Frequency must be a normal float (finite, non-zero, not subnormal),
/// amplitude finite, and the octave count at most [`MAX_OCTAVES`].
/// Non-positive octave counts are accepted.
pub(crate) fn validate(octaves: i64, frequency: f64, amplitude: f64) -> Result<(), NoiseError> {
    if !frequency.is_normal() {
        return Err(NoiseError::InvalidFrequency(frequency));
    }
    if !amplitude.is_finite() {
        return Err(NoiseError::InvalidAmplitude(amplitude));
    }
    if octaves > i64::from(MAX_OCTAVES) {
        return Err(NoiseError::TooManyOctaves {
            octaves,
            max: MAX_OCTAVES,
        });
    }
    Ok(())
}

/// Checks that `coord` stays inside the `i32` lattice once scaled for the
/// highest octave.
///
/// The top octave scales by `2^(octaves - 1) / frequency`, the largest factor
/// applied, so every lower octave is in range whenever this one is. Outside
/// the lattice the index saturates and the cell offset is no longer in
/// `[0, 1)`, which overflows the interpolation to NaN.
pub(crate) fn check_coordinate(coord: f64, octaves: i32, frequency: f64) -> Result<(), NoiseError> {
    if octaves <= 0 {
        return Ok(());
    }
    let gain = 2f64.powi(octaves - 1);
    let lattice = f64::from(i32::MIN)..f64::from(i32::MAX);
    if lattice.contains(&(coord * gain / frequency)) {
        Ok(())
    } else {
        Err(NoiseError::CoordinateOutOfRange(coord))
    }
}

/// Sums `octaves` octaves of 1D noise. Parameters must already be validated.
#[inline]
pub(crate) fn fbm_1d(x: f64, seed: i32, octaves: u32, frequency: f64, amplitude: f64) -> f64 {
    let mut gain = 1.0;
    let mut sum = 0.0;
    for _ in 0..octaves {
        sum += sample_1d(x * gain / frequency, seed) * amplitude / gain;
        gain *= 2.0;
    }
    sum
}

/// Sums `octaves` octaves of 2D noise. Parameters must already be validated.
#[inline]
pub(crate) fn fbm_2d(
    x: f64,
    y: f64,
    seed: i32,
    octaves: u32,
    frequency: f64,
    amplitude: f64,
) -> f64 {
    let mut gain = 1.0;
    let mut sum = 0.0;
    for _ in 0..octaves {
        sum += sample_2d(x * gain / frequency, y * gain / frequency, seed) * amplitude / gain;
        gain *= 2.0;
    }
    sum
}

/// Fractal 1D value noise at `x`.
///
/// `frequency` divides the coordinate, so larger values stretch the field.
/// An `octaves` count of zero or less returns `0.0`.
///
/// # Errors
/// Returns [`NoiseError`] if `frequency` is zero, subnormal or non-finite,
/// `amplitude` is non-finite, `octaves` exceeds [`MAX_OCTAVES`], or `x`
/// leaves the `i32` lattice range once scaled by `2^(octaves - 1) / frequency`.
pub fn value_1d(
    x: f64,
    seed: i32,
    octaves: i32,
    frequency: f64,
    amplitude: f64,
) -> Result<f64, NoiseError> {
    validate(i64::from(octaves), frequency, amplitude)?;
    check_coordinate(x, octaves, frequency)?;
    Ok(fbm_1d(x, seed, octaves.max(0) as u32, frequency, amplitude))
}

/// Fractal 2D value noise at `(x, y)`.
///
/// Same parameter rules as [`value_1d`].
///
/// # Errors
/// Returns [`NoiseError`] if `frequency` is zero, subnormal or non-finite,
/// `amplitude` is non-finite, `octaves` exceeds [`MAX_OCTAVES`], or either
/// coordinate leaves the `i32` lattice range once scaled by
/// `2^(octaves - 1) / frequency`.
pub fn value_2d(
    x: f64,
    y: f64,
    seed: i32,
    octaves: i32,
    frequency: f64,
    amplitude: f64,
) -> Result<f64, NoiseError> {
    validate(i64::from(octaves), frequency, amplitude)?;
    check_coordinate(x, octaves, frequency)?;
    check_coordinate(y, octaves, frequency)?;
    Ok(fbm_2d(x, y, seed, octaves.max(0) as u32, frequency, amplitude))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::noise::smooth_1d;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_single_octave_at_origin() {
        let value = value_1d(0.0, 42, 1, 1.0, 1.0).unwrap();
        assert_eq!(value, sample_1d(0.0, 42));
        assert_eq!(value, smooth_1d(0, 42));
        assert_eq!(value, 0.027_874_696_068_465_71);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_single_octave_identity() {
        for (x, frequency, amplitude) in [(3.7, 2.0, 5.0), (-11.2, 0.5, -1.0), (100.0, 33.0, 0.1)] {
            assert_eq!(
                value_1d(x, 9, 1, frequency, amplitude).unwrap(),
                sample_1d(x / frequency, 9) * amplitude
            );
            assert_eq!(
                value_2d(x, -x, 9, 1, frequency, amplitude).unwrap(),
                sample_2d(x / frequency, -x / frequency, 9) * amplitude
            );
        }
    }

    #[test]
    fn test_octave_contribution_decays() {
        let amplitude = 3.0;
        for octaves in 1..12 {
            let coarse = value_1d(12.345, 4, octaves, 7.0, amplitude).unwrap();
            let fine = value_1d(12.345, 4, octaves + 1, 7.0, amplitude).unwrap();
            let bound = amplitude / 2f64.powi(octaves);
            assert!(
                (fine - coarse).abs() <= bound + 1e-12,
                "octave {octaves} contributed {} (bound {bound})",
                (fine - coarse).abs()
            );

            let coarse = value_2d(-5.5, 8.25, 4, octaves, 7.0, amplitude).unwrap();
            let fine = value_2d(-5.5, 8.25, 4, octaves + 1, 7.0, amplitude).unwrap();
            assert!((fine - coarse).abs() <= bound + 1e-12);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_non_positive_octaves_are_zero() {
        assert_eq!(value_1d(1.5, 1, 0, 1.0, 1.0).unwrap(), 0.0);
        assert_eq!(value_1d(1.5, 1, -4, 1.0, 1.0).unwrap(), 0.0);
        assert_eq!(value_2d(1.5, 2.5, 1, i32::MIN, 1.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        for frequency in [0.0, -0.0, 1e-310, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                value_1d(1.0, 0, 4, frequency, 1.0),
                Err(NoiseError::InvalidFrequency(_))
            ));
            assert!(matches!(
                value_2d(1.0, 1.0, 0, 4, frequency, 1.0),
                Err(NoiseError::InvalidFrequency(_))
            ));
        }
    }

    #[test]
    fn test_subnormal_frequency_rejected() {
        assert!(matches!(
            value_1d(1.0, 0, 1, 1e-310, 1.0),
            Err(NoiseError::InvalidFrequency(_))
        ));
    }

    #[test]
    fn test_overflowing_coordinates_rejected() {
        assert!(matches!(
            value_1d(f64::MAX, 0, 2, 1.0, 1.0),
            Err(NoiseError::CoordinateOutOfRange(_))
        ));
        assert!(matches!(
            value_2d(1e300, 0.0, 0, 1, 1e-10, 1.0),
            Err(NoiseError::CoordinateOutOfRange(_))
        ));
        assert!(matches!(
            value_2d(0.0, -1e300, 0, 1, 1e-10, 1.0),
            Err(NoiseError::CoordinateOutOfRange(_))
        ));
        assert!(matches!(
            value_1d(f64::NAN, 0, 1, 1.0, 1.0),
            Err(NoiseError::CoordinateOutOfRange(_))
        ));
    }

    #[test]
    fn test_coordinate_limit_tracks_octaves() {
        let value = value_1d(2e9, 0, 1, 1.0, 1.0).unwrap();
        assert!(value.is_finite());
        assert!(matches!(
            value_1d(2e9, 0, 2, 1.0, 1.0),
            Err(NoiseError::CoordinateOutOfRange(_))
        ));
        assert!(matches!(
            value_1d(f64::MAX, 0, 1, 1.0, 1.0),
            Err(NoiseError::CoordinateOutOfRange(_))
        ));

        let value = value_2d(1e6, -1e6, 3, 4, 8.0, 1.0).unwrap();
        assert!(value.is_finite());
        // No octaves means nothing is sampled.
        assert!(value_1d(f64::MAX, 0, 0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_invalid_amplitude_rejected() {
        assert!(matches!(
            value_1d(1.0, 0, 4, 1.0, f64::NAN),
            Err(NoiseError::InvalidAmplitude(_))
        ));
    }

    #[test]
    fn test_octave_limit() {
        assert!(value_1d(0.3, 0, MAX_OCTAVES as i32, 1.0, 1.0).is_ok());
        assert!(matches!(
            value_2d(0.3, 0.3, 0, MAX_OCTAVES as i32 + 1, 1.0, 1.0),
            Err(NoiseError::TooManyOctaves { octaves: 31, max: 30 })
        ));
    }

    #[test]
    fn test_negative_frequency_mirrors_field() {
        let forward = value_1d(2.5, 6, 3, 4.0, 1.0).unwrap();
        let mirrored = value_1d(-2.5, 6, 3, -4.0, 1.0).unwrap();
        assert!((forward - mirrored).abs() < 1e-15);
    }

    #[test]
    fn test_sum_within_analytic_bound() {
        for i in -200..200 {
            let x = f64::from(i) * 0.77;
            let value = value_2d(x, x * 0.5, 13, 8, 3.0, 2.0).unwrap();
            assert!(value.abs() <= 2.0 * (2.0 - 2f64.powi(-7)) + 1e-12);
        }
    }
}
