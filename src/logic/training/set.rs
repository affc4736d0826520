//! Training Set - validated, positionally aligned samples and labels

use std::path::Path;
use crc32fast::Hasher;

use crate::logic::features::FeatureVector;
use crate::logic::model::FailureLabel;
use super::error::TrainingDataError;
use super::reader::{read_labels, read_samples};

#[derive(Debug, Clone)]
pub struct TrainingSet {
    samples: Vec<FeatureVector>,
    labels: Vec<FailureLabel>,
}

impl TrainingSet {
    /// Pair samples with raw integer labels by row position
    pub fn new(samples: Vec<FeatureVector>, labels: Vec<i64>) -> Result<Self, TrainingDataError> {
        if samples.len() != labels.len() {
            return Err(TrainingDataError::LengthMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }
        if samples.is_empty() {
            return Err(TrainingDataError::Empty);
        }

        let labels = labels
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                FailureLabel::from_int(value)
                    .ok_or(TrainingDataError::InvalidLabel { row: i + 1, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { samples, labels })
    }

    /// Read the sample file and the label file, then pair them
    pub fn from_files(
        data_path: impl AsRef<Path>,
        labels_path: impl AsRef<Path>,
    ) -> Result<Self, TrainingDataError> {
        let samples = read_samples(data_path.as_ref())?;
        let labels = read_labels(labels_path.as_ref())?;
        let set = Self::new(samples, labels)?;

        log::info!(
            "Loaded {} training samples from {} / {}",
            set.len(),
            data_path.as_ref().display(),
            labels_path.as_ref().display()
        );
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[FeatureVector] {
        &self.samples
    }

    pub fn labels(&self) -> &[FailureLabel] {
        &self.labels
    }

    /// Iterate (sample, label) rows in file order
    pub fn iter(&self) -> impl Iterator<Item = (&FeatureVector, FailureLabel)> + '_ {
        self.samples.iter().zip(self.labels.iter().copied())
    }

    /// Number of rows labeled as failures
    pub fn failure_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_failure()).count()
    }

    /// CRC32 over every row in order
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = Hasher::new();
        for (sample, label) in self.iter() {
            hasher.update(&sample.temperature.to_le_bytes());
            hasher.update(&sample.disk_errors.to_le_bytes());
            hasher.update(&[label.as_u8()]);
        }
        hasher.finalize()
    }
}
