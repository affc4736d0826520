//! Classifier - pluggable decision function
//!
//! Input: one FeatureVector. Output: FailureLabel.
//! Implementations are fitted before they are handed to a predictor and
//! never change afterwards.

use crate::logic::features::FeatureVector;
use super::error::ModelError;
use super::types::{FailureLabel, ModelInfo};

pub trait Classifier: Send + Sync {
    /// Short algorithm name for logs
    fn name(&self) -> &'static str;

    fn classify(&self, features: &FeatureVector) -> Result<FailureLabel, ModelError>;

    /// Fit-time metadata, if the implementation records any
    fn info(&self) -> Option<&ModelInfo> {
        None
    }
}
