//! Model Types
//!
//! Data structures only, no classification logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// FAILURE LABEL
// ============================================================================

/// Binary classifier output, encoded as 0/1 in training files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FailureLabel {
    Healthy,
    Failure,
}

impl FailureLabel {
    /// Decode the integer label; anything but 0 or 1 is rejected
    pub fn from_int(value: i64) -> Option<Self> {
        match value {
            0 => Some(FailureLabel::Healthy),
            1 => Some(FailureLabel::Failure),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            FailureLabel::Healthy => 0,
            FailureLabel::Failure => 1,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FailureLabel::Failure)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureLabel::Healthy => "healthy",
            FailureLabel::Failure => "failure",
        }
    }
}

impl std::fmt::Display for FailureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// MODEL INFO
// ============================================================================

/// Metadata captured when a model is fitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub algorithm: String,
    pub neighbors: usize,
    pub samples: usize,
    pub failures: usize,
    pub feature_names: Vec<String>,
    pub layout_hash: u32,
    /// CRC32 of the training rows
    pub dataset_hash: u32,
    pub fitted_at: DateTime<Utc>,
}
