use thiserror::Error;

pub type Result<T> = std::result::Result<T, MappingError>;

/// Errors produced while building a mapping or inspecting bucket boundaries.
///
/// None of these are retryable: the same input always yields the same error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingError {
    #[error("Invalid scale: {scale} (supported: {min}..={max})")]
    InvalidScale { scale: i32, min: i32, max: i32 },

    /// The boundary lies above the largest finite `f64`; the histogram
    /// should lower its scale.
    #[error("Overflow: index {index} at scale {scale} exceeds the largest finite value")]
    Overflow { index: i32, scale: i32 },

    /// The boundary lies below the smallest value resolvable at this scale.
    #[error("Underflow: index {index} at scale {scale} is below the smallest value")]
    Underflow { index: i32, scale: i32 },
}

impl MappingError {
    pub fn is_invalid_scale(&self) -> bool {
        matches!(self, MappingError::InvalidScale { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, MappingError::Overflow { .. })
    }

    pub fn is_underflow(&self) -> bool {
        matches!(self, MappingError::Underflow { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MappingError::InvalidScale {
            scale: 21,
            min: 1,
            max: 20,
        };
        assert_eq!(error.to_string(), "Invalid scale: 21 (supported: 1..=20)");

        let error = MappingError::Overflow {
            index: 2048,
            scale: 1,
        };
        assert!(error.to_string().contains("index 2048"));
        assert!(error.is_overflow());
        assert!(!error.is_underflow());
    }

    #[test]
    fn test_error_predicates() {
        let error = MappingError::Underflow {
            index: -2045,
            scale: 1,
        };
        assert!(error.is_underflow());
        assert!(!error.is_overflow());
        assert!(!error.is_invalid_scale());
    }
}
