//! Bucket-index mappings for exponential histograms.
//!
//! A mapping at scale `s` splits the positive `f64` range into buckets whose
//! boundaries grow by a factor of `2^(2^-s)`. Bucket `i` is the half-open range
//! `[lower_boundary(i), lower_boundary(i + 1))`.
//!
//! Two families cover the supported scales:
//!
//! - [`ExponentMapping`] for `-10..=0`, reading the IEEE-754 exponent directly.
//! - [`LogarithmMapping`] for `1..=20`, using the natural logarithm and a table
//!   of precomputed constants.
//!
//! [`Mapping`] picks the family from the sign of the scale.

pub mod exponent;
pub mod logarithm;
pub mod table;

use std::fmt;

use crate::bucket::Bucket;
use crate::error::{MappingError, Result};

pub use exponent::ExponentMapping;
pub use logarithm::LogarithmMapping;
pub use table::LogarithmParams;

/// Coarsest supported scale.
pub const MIN_SCALE: i32 = exponent::MIN_SCALE;

/// Finest supported scale.
pub const MAX_SCALE: i32 = logarithm::MAX_SCALE;

/// Smallest normal `f64`, `2^-1022`.
pub const MIN_VALUE: f64 = f64::MIN_POSITIVE;

/// Largest finite `f64`.
pub const MAX_VALUE: f64 = f64::MAX;

/// Operations shared by every mapping.
///
/// `map_to_index` expects a finite value greater than zero; the result for
/// anything else is unspecified but never panics.
pub trait IndexMapping {
    /// Returns the index of the bucket containing `value`.
    fn map_to_index(&self, value: f64) -> i32;

    /// Returns the smallest value that maps to `index`.
    fn lower_boundary(&self, index: i32) -> Result<f64>;

    fn scale(&self) -> i32;
}

/// A mapping of either family, fixed to one scale for its whole lifetime.
///
/// ```rust
/// use loka_exponential::{IndexMapping, Mapping};
///
/// let mapping = Mapping::new(3).unwrap();
/// let index = mapping.map_to_index(42.0);
///
/// assert!(mapping.lower_boundary(index).unwrap() <= 42.0);
/// assert!(42.0 < mapping.lower_boundary(index + 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mapping {
    Exponent(ExponentMapping),
    Logarithm(LogarithmMapping),
}

impl Mapping {
    pub fn new(scale: i32) -> Result<Self> {
        if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
            return Err(MappingError::InvalidScale {
                scale,
                min: MIN_SCALE,
                max: MAX_SCALE,
            });
        }

        if scale <= exponent::MAX_SCALE {
            ExponentMapping::new(scale).map(Mapping::Exponent)
        } else {
            LogarithmMapping::new(scale).map(Mapping::Logarithm)
        }
    }

    /// Returns the bucket with the given index.
    ///
    /// Fails with `Overflow` for the last index, whose upper edge lies
    /// beyond the largest finite value.
    pub fn bucket(&self, index: i32) -> Result<Bucket> {
        let lower = self.lower_boundary(index)?;
        let upper = match index.checked_add(1) {
            Some(next) => self.lower_boundary(next)?,
            None => {
                return Err(MappingError::Overflow {
                    index,
                    scale: self.scale(),
                });
            }
        };

        Ok(Bucket {
            index,
            lower,
            upper,
        })
    }

    /// Returns the bucket containing `value`.
    pub fn bucket_of(&self, value: f64) -> Result<Bucket> {
        self.bucket(self.map_to_index(value))
    }

    pub fn is_exponent(&self) -> bool {
        matches!(self, Mapping::Exponent(_))
    }

    pub fn is_logarithm(&self) -> bool {
        matches!(self, Mapping::Logarithm(_))
    }
}

impl IndexMapping for Mapping {
    #[inline]
    fn map_to_index(&self, value: f64) -> i32 {
        match self {
            Mapping::Exponent(mapping) => mapping.map_to_index(value),
            Mapping::Logarithm(mapping) => mapping.map_to_index(value),
        }
    }

    #[inline]
    fn lower_boundary(&self, index: i32) -> Result<f64> {
        match self {
            Mapping::Exponent(mapping) => mapping.lower_boundary(index),
            Mapping::Logarithm(mapping) => mapping.lower_boundary(index),
        }
    }

    #[inline]
    fn scale(&self) -> i32 {
        match self {
            Mapping::Exponent(mapping) => mapping.scale(),
            Mapping::Logarithm(mapping) => mapping.scale(),
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapping::Exponent(mapping) => write!(f, "exponent(scale={})", mapping.scale()),
            Mapping::Logarithm(mapping) => write!(f, "logarithm(scale={})", mapping.scale()),
        }
    }
}

impl TryFrom<i32> for Mapping {
    type Error = MappingError;

    fn try_from(scale: i32) -> Result<Self> {
        Mapping::new(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_selection() {
        for scale in MIN_SCALE..=0 {
            assert!(Mapping::new(scale).unwrap().is_exponent(), "scale {scale}");
        }

        for scale in 1..=MAX_SCALE {
            assert!(Mapping::new(scale).unwrap().is_logarithm(), "scale {scale}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Mapping::new(21),
            Err(MappingError::InvalidScale {
                scale: 21,
                min: -10,
                max: 20
            })
        );
        assert!(Mapping::new(-11).unwrap_err().is_invalid_scale());
        assert!(Mapping::try_from(i32::MIN).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Mapping::new(-2).unwrap().to_string(), "exponent(scale=-2)");
        assert_eq!(Mapping::new(8).unwrap().to_string(), "logarithm(scale=8)");
    }

    #[test]
    fn test_bucket() {
        let mapping = Mapping::new(0).unwrap();
        let bucket = mapping.bucket_of(3.0).unwrap();

        assert_eq!(bucket.index, 1);
        assert_eq!(bucket.lower, 2.0);
        assert_eq!(bucket.upper, 4.0);
        assert!(bucket.contains(3.0));
        assert!(!bucket.contains(4.0));
    }

    #[test]
    fn test_bucket_at_the_top() {
        let mapping = Mapping::new(4).unwrap();
        let top = mapping.map_to_index(MAX_VALUE);

        assert!(mapping.bucket(top).unwrap_err().is_overflow());
        assert!(mapping.bucket(top - 1).is_ok());
        assert!(mapping.bucket(i32::MAX).unwrap_err().is_overflow());
    }
}
