use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MappingError, Result};
use crate::mapping::{IndexMapping, MAX_SCALE, MIN_SCALE, Mapping};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Histogram resolution; buckets grow by `2^(2^-scale)` (default: 20)
    pub scale: i32,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self { scale: MAX_SCALE }
    }
}

impl MappingConfig {
    pub fn for_scale(scale: i32) -> Self {
        Self { scale }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_SCALE..=MAX_SCALE).contains(&self.scale) {
            return Err(MappingError::InvalidScale {
                scale: self.scale,
                min: MIN_SCALE,
                max: MAX_SCALE,
            });
        }

        Ok(())
    }

    pub fn build(&self) -> Result<Mapping> {
        if let Err(error) = self.validate() {
            warn!(scale = self.scale, %error, "Rejected mapping configuration");
            return Err(error);
        }

        let mapping = Mapping::new(self.scale)?;

        debug!(
            scale = mapping.scale(),
            family = if mapping.is_exponent() { "exponent" } else { "logarithm" },
            "Built bucket mapping"
        );

        Ok(mapping)
    }
}
