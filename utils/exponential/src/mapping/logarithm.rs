use crate::error::{MappingError, Result};
use crate::float64::{get_base2_exponent, get_significand, power_of_two};

use super::table::{LOGARITHM_PARAMS, LogarithmParams};
use super::{IndexMapping, MIN_VALUE};

/// Finest scale served by [`LogarithmMapping`].
pub const MAX_SCALE: i32 = 20;

/// Coarsest scale served by [`LogarithmMapping`].
pub const MIN_SCALE: i32 = 1;

/// Mapping for scales `1..=20`, where each binary octave is split into
/// `2^scale` buckets.
///
/// Indices are computed as `floor(ln(value) * scale_factor)` and boundaries
/// as `exp(index * inverse_factor)`, with both ends of the range pinned to
/// precomputed constants. Values at or below `MIN_VALUE` all land in the
/// lowest bucket; subnormals are not resolved at these scales.
///
/// ```rust
/// use loka_exponential::{IndexMapping, LogarithmMapping};
///
/// let mapping = LogarithmMapping::new(1).unwrap();
///
/// assert_eq!(mapping.map_to_index(15.0), 7);
/// assert_eq!(mapping.map_to_index(1.0), 0);
/// assert_eq!(mapping.map_to_index(0.75), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogarithmMapping {
    scale: i32,
    params: &'static LogarithmParams,
}

impl LogarithmMapping {
    pub fn new(scale: i32) -> Result<Self> {
        if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
            return Err(MappingError::InvalidScale {
                scale,
                min: MIN_SCALE,
                max: MAX_SCALE,
            });
        }

        Ok(Self {
            scale,
            params: &LOGARITHM_PARAMS[(scale - MIN_SCALE) as usize],
        })
    }

    pub fn params(&self) -> &'static LogarithmParams {
        self.params
    }

    pub fn min_index(&self) -> i32 {
        self.params.min_index
    }

    pub fn max_index(&self) -> i32 {
        self.params.max_index
    }
}

impl IndexMapping for LogarithmMapping {
    fn map_to_index(&self, value: f64) -> i32 {
        let params = self.params;

        if value >= params.max_boundary {
            return params.max_index;
        }

        if value <= MIN_VALUE {
            return params.min_index;
        }

        let exponent = get_base2_exponent(value);

        // Deliberately stricter than plain floor(ln(v) * scale_factor): powers
        // of two skip the logarithm and the octave clamp below undoes the
        // one-bucket errors ln() rounding makes next to bucket boundaries.
        if get_significand(value) == 0 {
            return exponent << self.scale;
        }

        let index = (value.ln() * params.scale_factor).floor() as i32;

        // Rounding in ln() must not move the value out of its binary octave,
        // nor into the last bucket, which starts at max_boundary.
        let octave_start = exponent << self.scale;
        let octave_end = ((exponent + 1) << self.scale) - 1;

        index
            .clamp(octave_start, octave_end)
            .min(params.max_index - 1)
    }

    fn lower_boundary(&self, index: i32) -> Result<f64> {
        let params = self.params;

        if index >= params.max_index {
            if index == params.max_index {
                return Ok(params.max_boundary);
            }

            return Err(MappingError::Overflow {
                index,
                scale: self.scale,
            });
        }

        if index <= params.min_index {
            if index == params.min_index {
                return Ok(MIN_VALUE);
            }

            return Err(MappingError::Underflow {
                index,
                scale: self.scale,
            });
        }

        // Octave starts are exact powers of two; exp() may round them.
        let octave_mask = (1 << self.scale) - 1;

        if index & octave_mask == 0 {
            return Ok(power_of_two((index >> self.scale) as i64));
        }

        Ok((index as f64 * params.inverse_factor).exp())
    }

    #[inline]
    fn scale(&self) -> i32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MAX_VALUE;

    #[test]
    fn test_invalid_scales() {
        assert!(LogarithmMapping::new(0).unwrap_err().is_invalid_scale());
        assert!(LogarithmMapping::new(21).unwrap_err().is_invalid_scale());
        assert!(LogarithmMapping::new(-3).unwrap_err().is_invalid_scale());
    }

    #[test]
    fn test_params_follow_scale() {
        for scale in MIN_SCALE..=MAX_SCALE {
            let mapping = LogarithmMapping::new(scale).unwrap();
            let params = mapping.params();
            let buckets = 2f64.powi(scale);

            assert_eq!(params.min_index, -1022 << scale);
            assert_eq!(params.max_index, (1024 << scale) - 1);
            assert_eq!(params.scale_factor, std::f64::consts::LOG2_E * buckets);
            assert_eq!(params.inverse_factor, std::f64::consts::LN_2 / buckets);
            assert!(params.max_boundary < MAX_VALUE);
        }
    }

    #[test]
    fn test_max_boundary_increases_with_scale() {
        let mut previous = 0.0;

        for scale in MIN_SCALE..=MAX_SCALE {
            let boundary = LogarithmMapping::new(scale).unwrap().params().max_boundary;
            assert!(boundary > previous, "scale {scale}");
            previous = boundary;
        }

        // sqrt(2) * 2^1023
        assert_eq!(
            LogarithmMapping::new(1).unwrap().params().max_boundary,
            std::f64::consts::SQRT_2 * 2f64.powi(1023)
        );
    }

    #[test]
    fn test_saturation() {
        for scale in MIN_SCALE..=MAX_SCALE {
            let mapping = LogarithmMapping::new(scale).unwrap();

            assert_eq!(mapping.map_to_index(MAX_VALUE), mapping.max_index());
            assert_eq!(mapping.map_to_index(MIN_VALUE), mapping.min_index());
            assert_eq!(mapping.map_to_index(MIN_VALUE / 2.0), mapping.min_index());
            assert_eq!(mapping.map_to_index(f64::from_bits(1)), mapping.min_index());
        }
    }

    #[test]
    fn test_powers_of_two_are_exact() {
        for scale in MIN_SCALE..=MAX_SCALE {
            let mapping = LogarithmMapping::new(scale).unwrap();

            for exponent in -1022..=1023 {
                let index = exponent << scale;
                let value = power_of_two(exponent as i64);

                assert_eq!(mapping.map_to_index(value), index, "2^{exponent} at {scale}");
                assert_eq!(mapping.lower_boundary(index).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_boundaries_one_past_the_ends() {
        let mapping = LogarithmMapping::new(3).unwrap();

        assert_eq!(
            mapping.lower_boundary(mapping.max_index() + 1),
            Err(MappingError::Overflow {
                index: 8192,
                scale: 3
            })
        );
        assert_eq!(
            mapping.lower_boundary(mapping.min_index() - 1),
            Err(MappingError::Underflow {
                index: -8177,
                scale: 3
            })
        );
    }
}
