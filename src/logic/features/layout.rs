//! Feature Layout - Centralized Feature Definition
//!
//! Order here is the column order of the training data file and of every
//! vector handed to a classifier.

use crc32fast::Hasher;

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "temperature", // 0: Reported machine temperature
    "disk_errors", // 1: Disk error count
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 2;

/// CRC32 of the feature names in order
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}
