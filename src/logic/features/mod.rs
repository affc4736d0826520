//! Features Module - Classifier input layout
//!
//! Two raw signals per machine: temperature and disk error count.

pub mod layout;
pub mod vector;

pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::FeatureVector;
