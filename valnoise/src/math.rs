//! Small numeric helpers shared by the noise stages.

/// Floors a coordinate to the lattice index at or below it.
///
/// Rounds toward negative infinity, so `-0.5` maps to `-1` rather than `0`.
/// Values outside the `i32` range saturate to `i32::MIN`/`i32::MAX` and NaN
/// maps to `0`.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

/// Splits a coordinate into its lattice index and the offset from it.
///
/// The offset lies in `[0, 1)` for coordinates inside the `i32` range.
#[inline]
#[must_use]
pub fn split(value: f64) -> (i32, f64) {
    let index = floor(value);
    (index, value - f64::from(index))
}
