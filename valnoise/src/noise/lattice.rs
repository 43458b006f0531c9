//! Integer lattice hash.
//!
//! The hash folds the seed into a cubic polynomial over a bit-scrambled
//! coordinate. All arithmetic is 32-bit two's-complement with wraparound;
//! the overflow is what scatters neighboring inputs, so the `wrapping_*`
//! calls are load-bearing and must not be widened or saturated.

/// Multiplier folding the `y` lattice coordinate onto the 1D hash.
pub const LATTICE_Y_STRIDE: i32 = 57;

/// Quadratic coefficient base, mixed with the inverted seed.
const QUADRATIC_BASE: i32 = 15_731;
/// Linear coefficient base, offset by the seed.
const LINEAR_BASE: i32 = 789_221;
/// Constant term of the polynomial.
const CONSTANT_TERM: i32 = 1_376_312_589;
/// Mask keeping the non-negative 31-bit range.
const POSITIVE_MASK: i32 = 0x7FFF_FFFF;
/// `2^30`, maps the masked value onto `[0, 2)`.
const NORMALIZER: f64 = 1_073_741_824.0;

/// Hashes a 1D lattice point to a pseudo-random value in `[-1, 1]`.
///
/// Total over every `x` and `seed`. Note that `x = 0` hashes to the same
/// value for every seed, since every seeded term is multiplied by zero.
#[inline]
#[must_use]
pub const fn hash_1d(x: i32, seed: i32) -> f64 {
    let x = (x << 13) ^ x;
    let quadratic = QUADRATIC_BASE.wrapping_add(i32::MAX.wrapping_sub(seed));
    let linear = LINEAR_BASE.wrapping_add(seed);
    let inner = x.wrapping_mul(x).wrapping_mul(quadratic).wrapping_add(linear);
    let bits = x.wrapping_mul(inner).wrapping_add(CONSTANT_TERM) & POSITIVE_MASK;

    (1.0 - bits as f64 / NORMALIZER).clamp(-1.0, 1.0)
}

/// Hashes a 2D lattice point by folding it onto [`hash_1d`] as `x + y * 57`.
#[inline]
#[must_use]
pub const fn hash_2d(x: i32, y: i32, seed: i32) -> f64 {
    hash_1d(x.wrapping_add(y.wrapping_mul(LATTICE_Y_STRIDE)), seed)
}
