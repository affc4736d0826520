//! Model Module - Failure classification
//!
//! The predictor only sees the `Classifier` trait, so the k-NN model can be
//! swapped without touching the alert path.

pub mod classifier;
pub mod error;
pub mod knn;
pub mod types;

pub use classifier::Classifier;
pub use error::ModelError;
pub use knn::KNearestNeighbors;
pub use types::{FailureLabel, ModelInfo};
