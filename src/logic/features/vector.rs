//! Feature Vector - single classifier input
//!
//! Values stay in raw units. No scaling is applied, so one degree of
//! temperature weighs exactly as much as one disk error in any distance.

use serde::{Deserialize, Serialize};
use super::layout::FEATURE_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector {
    pub temperature: i64,
    pub disk_errors: i64,
}

impl FeatureVector {
    pub fn new(temperature: i64, disk_errors: i64) -> Self {
        Self { temperature, disk_errors }
    }

    /// Values in layout order, widened for distance math
    pub fn to_f64(&self) -> [f64; FEATURE_COUNT] {
        [self.temperature as f64, self.disk_errors as f64]
    }
}

impl std::fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(temperature={}, disk_errors={})", self.temperature, self.disk_errors)
    }
}
