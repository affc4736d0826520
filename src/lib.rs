//! Failure Predict - machine failure prediction and alert queueing
//!
//! A classifier is fitted once from historical (temperature, disk errors)
//! samples; every positive prediction queues a timestamped alert.

pub mod constants;
pub mod logic;

pub use logic::alert::{Alert, AlertQueue};
pub use logic::config::{ConfigError, PredictorConfig};
pub use logic::features::FeatureVector;
pub use logic::model::{Classifier, FailureLabel, KNearestNeighbors, ModelError, ModelInfo};
pub use logic::predictor::{FailurePredictor, PredictorError};
pub use logic::training::{TrainingDataError, TrainingSet};
