//! IEEE-754 double-precision decomposition.
//!
//! Helpers that read the exponent and significand fields of an `f64` and
//! compose exact powers of two from raw bits. Callers pass finite, positive,
//! non-zero values only.

/// Width of the significand field in bits.
pub const SIGNIFICAND_WIDTH: i32 = 52;

/// Width of the exponent field in bits.
pub const EXPONENT_WIDTH: i32 = 11;

/// Mask selecting the significand field.
pub const SIGNIFICAND_MASK: u64 = (1 << SIGNIFICAND_WIDTH) - 1;

/// Bias added to the unbiased exponent in the exponent field.
pub const EXPONENT_BIAS: i32 = (1 << (EXPONENT_WIDTH - 1)) - 1;

/// Mask selecting the exponent field.
pub const EXPONENT_MASK: u64 = ((1 << EXPONENT_WIDTH) - 1) << SIGNIFICAND_WIDTH;

/// Exponent of the smallest normal value, `0x1p-1022`.
pub const MIN_NORMAL_EXPONENT: i32 = -EXPONENT_BIAS + 1;

/// Exponent of the largest finite value.
pub const MAX_NORMAL_EXPONENT: i32 = EXPONENT_BIAS;

/// Exponent of the smallest subnormal value, `0x1p-1074`.
pub const MIN_SUBNORMAL_EXPONENT: i32 = MIN_NORMAL_EXPONENT - SIGNIFICAND_WIDTH;

/// Unbiased exponent encoded by an all-zero exponent field.
pub const SIGNED_ZERO_SUBNORMAL_EXPONENT: i32 = -EXPONENT_BIAS;

/// Returns the base-2 exponent of `value`, i.e. `floor(log2(value))`.
///
/// Subnormal values are resolved from the position of their highest set
/// significand bit, so `2^-1074` yields `-1074`.
#[inline]
pub fn get_base2_exponent(value: f64) -> i32 {
    let bits = value.to_bits();
    let raw_exponent = ((bits & EXPONENT_MASK) >> SIGNIFICAND_WIDTH) as i32;

    if raw_exponent == 0 {
        // Sign and exponent fields are zero, so the leading zeros cover them too.
        let leading_zeros = (bits & SIGNIFICAND_MASK).leading_zeros() as i32;
        MIN_NORMAL_EXPONENT - (leading_zeros - EXPONENT_WIDTH)
    } else {
        raw_exponent - EXPONENT_BIAS
    }
}

/// Returns the 52-bit significand field of `value`.
#[inline]
pub fn get_significand(value: f64) -> u64 {
    value.to_bits() & SIGNIFICAND_MASK
}

/// Builds `2^exponent` directly from its bit pattern.
///
/// `exponent` must lie in `MIN_SUBNORMAL_EXPONENT..=MAX_NORMAL_EXPONENT`.
#[inline]
pub fn power_of_two(exponent: i64) -> f64 {
    debug_assert!(
        (MIN_SUBNORMAL_EXPONENT as i64..=MAX_NORMAL_EXPONENT as i64).contains(&exponent),
        "exponent {exponent} is not representable"
    );

    let bits = if exponent < MIN_NORMAL_EXPONENT as i64 {
        // Subnormal: a single significand bit, no exponent field.
        1u64 << (SIGNIFICAND_WIDTH as i64 - (MIN_NORMAL_EXPONENT as i64 - exponent))
    } else {
        ((exponent + EXPONENT_BIAS as i64) as u64) << SIGNIFICAND_WIDTH
    };

    f64::from_bits(bits)
}
