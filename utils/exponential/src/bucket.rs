use serde::{Deserialize, Serialize};

/// The half-open value range `[lower, upper)` covered by one bucket index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub index: i32,
    pub lower: f64,
    pub upper: f64,
}

impl Bucket {
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
