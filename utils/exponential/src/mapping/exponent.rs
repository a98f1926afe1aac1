use crate::error::{MappingError, Result};
use crate::float64::{
    MAX_NORMAL_EXPONENT, MIN_SUBNORMAL_EXPONENT, get_base2_exponent, power_of_two,
};

use super::IndexMapping;

/// Finest scale served by [`ExponentMapping`].
pub const MAX_SCALE: i32 = 0;

/// Coarsest scale served by [`ExponentMapping`].
pub const MIN_SCALE: i32 = -10;

/// Mapping for scales `-10..=0`, where every bucket spans `2^-scale` whole
/// binary octaves.
///
/// Indices come straight from the IEEE-754 exponent field, so both
/// directions are exact and subnormal values resolve individually.
///
/// ```rust
/// use loka_exponential::{ExponentMapping, IndexMapping};
///
/// let mapping = ExponentMapping::new(-1).unwrap();
///
/// assert_eq!(mapping.map_to_index(16.0), 2);
/// assert_eq!(mapping.lower_boundary(2).unwrap(), 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentMapping {
    scale: i32,
    /// Largest index whose lower boundary falls below the smallest subnormal.
    underflow_index: i32,
    /// Smallest index whose lower boundary exceeds the largest finite value.
    overflow_index: i32,
}

impl ExponentMapping {
    pub fn new(scale: i32) -> Result<Self> {
        if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
            return Err(MappingError::InvalidScale {
                scale,
                min: MIN_SCALE,
                max: MAX_SCALE,
            });
        }

        let shift = -scale;

        Ok(Self {
            scale,
            underflow_index: (MIN_SUBNORMAL_EXPONENT - 1) >> shift,
            overflow_index: (MAX_NORMAL_EXPONENT + 1) >> shift,
        })
    }

    pub fn underflow_index(&self) -> i32 {
        self.underflow_index
    }

    pub fn overflow_index(&self) -> i32 {
        self.overflow_index
    }

    #[inline]
    fn shift(&self) -> i32 {
        -self.scale
    }
}

impl IndexMapping for ExponentMapping {
    /// `>>` on `i32` is arithmetic, so negative exponents round toward
    /// negative infinity (`-1 >> 1 == -1`).
    #[inline]
    fn map_to_index(&self, value: f64) -> i32 {
        get_base2_exponent(value) >> self.shift()
    }

    fn lower_boundary(&self, index: i32) -> Result<f64> {
        if index <= self.underflow_index {
            return Err(MappingError::Underflow {
                index,
                scale: self.scale,
            });
        }

        if index >= self.overflow_index {
            return Err(MappingError::Overflow {
                index,
                scale: self.scale,
            });
        }

        Ok(power_of_two((index as i64) << self.shift()))
    }

    #[inline]
    fn scale(&self) -> i32 {
        self.scale
    }
}
