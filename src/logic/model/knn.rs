//! k-Nearest Neighbors classifier
//!
//! Squared Euclidean distance over raw (unscaled) features. Candidates at the
//! same distance are taken in training-row order, and a tied vote resolves to
//! `Healthy`. Both rules make small-k results sensitive to row order and to
//! the relative units of temperature and disk errors.

use chrono::Utc;
use ndarray::Array2;

use crate::logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT};
use crate::logic::features::layout::layout_hash;
use crate::logic::training::TrainingSet;
use super::classifier::Classifier;
use super::error::ModelError;
use super::types::{FailureLabel, ModelInfo};

pub const ALGORITHM: &str = "knn";

#[derive(Debug, Clone)]
pub struct KNearestNeighbors {
    /// One row per training sample, columns in FEATURE_LAYOUT order
    points: Array2<f64>,
    labels: Vec<FailureLabel>,
    neighbors: usize,
    info: ModelInfo,
}

impl KNearestNeighbors {
    pub fn fit(training: &TrainingSet, neighbors: usize) -> Result<Self, ModelError> {
        if neighbors == 0 {
            return Err(ModelError::InvalidNeighbors(neighbors));
        }
        if neighbors > training.len() {
            return Err(ModelError::NotEnoughSamples {
                neighbors,
                samples: training.len(),
            });
        }

        let flat: Vec<f64> = training.samples().iter().flat_map(|s| s.to_f64()).collect();
        let points = Array2::from_shape_vec((training.len(), FEATURE_COUNT), flat)?;

        let info = ModelInfo {
            algorithm: ALGORITHM.to_string(),
            neighbors,
            samples: training.len(),
            failures: training.failure_count(),
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            layout_hash: layout_hash(),
            dataset_hash: training.fingerprint(),
            fitted_at: Utc::now(),
        };

        log::info!(
            "Fitted {}-NN model on {} samples ({} failures, dataset {:08x})",
            neighbors,
            info.samples,
            info.failures,
            info.dataset_hash
        );

        Ok(Self {
            points,
            labels: training.labels().to_vec(),
            neighbors,
            info,
        })
    }

    /// Indices of the k nearest training rows, closest first
    pub fn nearest(&self, features: &FeatureVector) -> Vec<usize> {
        let query = features.to_f64();

        let mut distances: Vec<(f64, usize)> = self
            .points
            .outer_iter()
            .enumerate()
            .map(|(i, row)| {
                let d: f64 = row
                    .iter()
                    .zip(query.iter())
                    .map(|(a, b)| (a - b).powi(2))
                    .sum();
                (d, i)
            })
            .collect();

        distances.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        distances.into_iter().take(self.neighbors).map(|(_, i)| i).collect()
    }
}

impl Classifier for KNearestNeighbors {
    fn name(&self) -> &'static str {
        ALGORITHM
    }

    fn classify(&self, features: &FeatureVector) -> Result<FailureLabel, ModelError> {
        let nearest = self.nearest(features);
        let failures = nearest.iter().filter(|&&i| self.labels[i].is_failure()).count();
        let healthy = nearest.len() - failures;

        let label = if failures > healthy {
            FailureLabel::Failure
        } else {
            FailureLabel::Healthy
        };

        log::debug!(
            "{} -> {} ({}/{} neighbors failed)",
            features,
            label,
            failures,
            nearest.len()
        );
        Ok(label)
    }

    fn info(&self) -> Option<&ModelInfo> {
        Some(&self.info)
    }
}
