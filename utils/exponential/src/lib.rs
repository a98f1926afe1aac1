//! # Loka Exponential
//!
//! Bucket-index mapping for exponential histograms.
//!
//! ## Overview
//!
//! An exponential histogram stores counts per bucket index instead of raw
//! measurements. At scale `s` every bucket is `2^(2^-s)` times wider than the
//! one before it, so a single integer per bucket describes its whole range.
//! This crate provides the mapping between values and indices:
//!
//! - **`map_to_index`**: value to bucket index, total over positive finite values
//! - **`lower_boundary`**: bucket index back to the smallest value it holds
//! - **`scale`**: the resolution the mapping was built for
//!
//! Histogram state, merging and rescaling live with the aggregator; a mapping is
//! an immutable `Copy` value that can be shared between threads freely.
//!
//! ## Quick Start
//!
//! ```rust
//! use loka_exponential::{IndexMapping, Mapping};
//!
//! let mapping = Mapping::new(0).expect("scale 0 is supported");
//!
//! assert_eq!(mapping.map_to_index(4.0), 2);
//! assert_eq!(mapping.map_to_index(1.0), 0);
//! assert_eq!(mapping.map_to_index(0.5), -1);
//!
//! assert_eq!(mapping.lower_boundary(2).unwrap(), 4.0);
//! ```
//!
//! ## Scales
//!
//! | Scale       | Family                 | Buckets per octave |
//! |-------------|------------------------|--------------------|
//! | `-10..=0`   | [`ExponentMapping`]    | `2^scale`          |
//! | `1..=20`    | [`LogarithmMapping`]   | `2^scale`          |
//!
//! ## Errors
//!
//! - **`InvalidScale`**: the scale lies outside the family's range
//! - **`Overflow`**: the requested boundary is above the largest finite `f64`
//! - **`Underflow`**: the requested boundary is below the smallest resolvable value
//!
//! Index lookup never fails: values past either end saturate to the first or
//! last index. Only boundary inspection can report `Overflow`/`Underflow`, which
//! callers walking bucket ranges must handle at the edges.
//!
//! ## Configuration
//!
//! ```rust
//! use loka_exponential::MappingConfig;
//!
//! let config: MappingConfig = serde_json::from_str(r#"{ "scale": 8 }"#).unwrap();
//! let mapping = config.build().unwrap();
//! ```

pub mod bucket;
pub mod config;
pub mod error;
pub mod float64;
pub mod mapping;

pub use bucket::Bucket;
pub use config::MappingConfig;
pub use error::{MappingError, Result};
pub use mapping::{
    ExponentMapping, IndexMapping, LogarithmMapping, LogarithmParams, MAX_SCALE, MAX_VALUE,
    MIN_SCALE, MIN_VALUE, Mapping,
};
