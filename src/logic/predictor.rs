//! Failure Predictor
//!
//! Owns a fitted classifier and the alert queue. A positive classification
//! appends an alert; anything else leaves the queue untouched. There is no
//! way back to an unfitted state and no retraining.

use std::path::Path;
use std::sync::Arc;

use crate::logic::alert::AlertQueue;
use crate::logic::config::{ConfigError, PredictorConfig};
use crate::logic::features::FeatureVector;
use crate::logic::model::{Classifier, FailureLabel, KNearestNeighbors, ModelError, ModelInfo};
use crate::logic::training::{TrainingDataError, TrainingSet};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug)]
pub enum PredictorError {
    TrainingData(TrainingDataError),
    Model(ModelError),
    Config(ConfigError),
}

impl std::fmt::Display for PredictorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictorError::TrainingData(e) => write!(f, "{}", e),
            PredictorError::Model(e) => write!(f, "{}", e),
            PredictorError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PredictorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredictorError::TrainingData(e) => Some(e),
            PredictorError::Model(e) => Some(e),
            PredictorError::Config(e) => Some(e),
        }
    }
}

impl From<TrainingDataError> for PredictorError {
    fn from(err: TrainingDataError) -> Self {
        PredictorError::TrainingData(err)
    }
}

impl From<ModelError> for PredictorError {
    fn from(err: ModelError) -> Self {
        PredictorError::Model(err)
    }
}

impl From<ConfigError> for PredictorError {
    fn from(err: ConfigError) -> Self {
        PredictorError::Config(err)
    }
}

// ============================================================================
// PREDICTOR
// ============================================================================

pub struct FailurePredictor {
    classifier: Box<dyn Classifier>,
    queue: Arc<AlertQueue>,
}

impl FailurePredictor {
    /// Fit the default 3-NN model on an in-memory training set
    pub fn new(training: &TrainingSet) -> Result<Self, PredictorError> {
        Self::with_config(training, &PredictorConfig::default())
    }

    /// Fit on an in-memory training set using `config.neighbors` and
    /// `config.time_format`; the file paths in `config` are ignored
    pub fn with_config(training: &TrainingSet, config: &PredictorConfig) -> Result<Self, PredictorError> {
        config.validate()?;
        let model = KNearestNeighbors::fit(training, config.neighbors)?;

        Ok(Self {
            classifier: Box::new(model),
            queue: Arc::new(AlertQueue::with_time_format(config.time_format.clone())),
        })
    }

    /// Read both training files and fit the default model
    pub fn from_files(data_path: impl AsRef<Path>, labels_path: impl AsRef<Path>) -> Result<Self, PredictorError> {
        let training = TrainingSet::from_files(data_path, labels_path)?;
        Self::new(&training)
    }

    /// Read the files named in `config` and fit with its settings
    pub fn from_config(config: &PredictorConfig) -> Result<Self, PredictorError> {
        config.validate()?;
        let training = TrainingSet::from_files(&config.data_file, &config.labels_file)?;
        Self::with_config(&training, config)
    }

    /// Wrap an already fitted classifier
    pub fn with_classifier(classifier: Box<dyn Classifier>) -> Self {
        Self {
            classifier,
            queue: Arc::new(AlertQueue::new()),
        }
    }

    /// Classify one (temperature, disk_errors) pair without side effects
    pub fn check_model(&self, temperature: i64, disk_errors: i64) -> Result<FailureLabel, PredictorError> {
        let features = FeatureVector::new(temperature, disk_errors);
        Ok(self.classifier.classify(&features)?)
    }

    /// Classify and queue an alert for `name` if failure is predicted
    pub fn predict(&self, name: &str, temperature: i64, disk_errors: i64) -> Result<(), PredictorError> {
        if self.check_model(temperature, disk_errors)?.is_failure() {
            log::warn!(
                "Predicted failure of {} (temperature={}, disk_errors={})",
                name,
                temperature,
                disk_errors
            );
            self.queue.add_alert(name);
        }
        Ok(())
    }

    pub fn print_alerts(&self) {
        self.queue.print_alerts();
    }

    pub fn clear_alerts(&self) {
        self.queue.clear_queue();
    }

    /// Shared handle for external draining
    pub fn get_alert_queue(&self) -> Arc<AlertQueue> {
        Arc::clone(&self.queue)
    }

    pub fn model_info(&self) -> Option<&ModelInfo> {
        self.classifier.info()
    }

    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }
}

impl std::fmt::Debug for FailurePredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailurePredictor")
            .field("classifier", &self.classifier.name())
            .field("queue", &self.queue)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    /// (temperature, disk_errors, label)
    const HISTORY: &[(i64, i64, i64)] = &[
        (100, 5, 0),
        (95, 0, 0),
        (105, 10, 0),
        (10, 5, 0),
        (15, 12, 0),
        (5, 8, 0),
        (0, 1100, 1),
        (10, 1250, 1),
        (3, 1180, 1),
        (60, 60, 1),
        (45, 55, 1),
        (55, 40, 0),
        (110, 95, 1),
        (90, 110, 0),
        (100, 120, 1),
    ];

    fn history() -> TrainingSet {
        TrainingSet::new(
            HISTORY.iter().map(|&(t, d, _)| FeatureVector::new(t, d)).collect(),
            HISTORY.iter().map(|&(_, _, l)| l).collect(),
        )
        .unwrap()
    }

    fn drain(queue: &AlertQueue) -> Vec<String> {
        let mut names = Vec::new();
        while !queue.empty() {
            names.push(queue.pop_alert().unwrap().name);
        }
        names
    }

    #[test]
    fn test_reference_scenario() {
        let pf = FailurePredictor::new(&history()).unwrap();

        assert_eq!(pf.check_model(100, 0).unwrap(), FailureLabel::Healthy);
        assert_eq!(pf.check_model(1, 1200).unwrap(), FailureLabel::Failure);
        assert_eq!(pf.check_model(10, 10).unwrap(), FailureLabel::Healthy);
        // Boundary points: their three neighbors split 2 to 1 for failure.
        assert_eq!(pf.check_model(50, 50).unwrap(), FailureLabel::Failure);
        assert_eq!(pf.check_model(100, 100).unwrap(), FailureLabel::Failure);

        pf.predict("test01", 100, 0).unwrap();
        pf.predict("test02", 1, 1200).unwrap();
        pf.predict("test03", 50, 50).unwrap();
        pf.predict("test04", 10, 10).unwrap();
        pf.predict("test05", 100, 100).unwrap();

        let queue = pf.get_alert_queue();
        let mut printed = Vec::new();
        queue.write_alerts(&mut printed).unwrap();
        let printed = String::from_utf8(printed).unwrap();
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" - Predicted failure of test02."));
        assert!(lines[1].ends_with(" - Predicted failure of test03."));
        assert!(lines[2].ends_with(" - Predicted failure of test05."));

        pf.clear_alerts();
        assert!(queue.empty());
    }

    #[test]
    fn test_queue_matches_positive_calls_in_order() {
        let pf = FailurePredictor::new(&history()).unwrap();
        let calls = [
            ("a", 1, 1200),
            ("b", 10, 10),
            ("c", 100, 100),
            ("d", 100, 0),
            ("a", 2, 1150),
        ];

        let mut expected = Vec::new();
        for &(name, t, d) in &calls {
            if pf.check_model(t, d).unwrap().is_failure() {
                expected.push(name.to_string());
            }
            pf.predict(name, t, d).unwrap();
        }

        assert_eq!(expected, vec!["a", "c", "a"]);
        assert_eq!(drain(&pf.get_alert_queue()), expected);
    }

    #[test]
    fn test_check_model_is_deterministic() {
        let pf = FailurePredictor::new(&history()).unwrap();
        let first = pf.check_model(50, 50).unwrap();
        for _ in 0..10 {
            assert_eq!(pf.check_model(50, 50).unwrap(), first);
        }
        assert!(pf.get_alert_queue().empty());
    }

    #[test]
    fn test_handle_shares_queue() {
        let pf = FailurePredictor::new(&history()).unwrap();
        let handle = pf.get_alert_queue();

        pf.predict("test02", 1, 1200).unwrap();
        assert_eq!(handle.len(), 1);
        assert_eq!(handle.pop_alert().unwrap().name, "test02");
        assert!(handle.pop_alert().is_none());
        assert!(pf.get_alert_queue().empty());
    }

    #[test]
    fn test_mismatched_training_data_fails_construction() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("compdata.txt");
        let labels = dir.path().join("compdata_true_errors.txt");
        fs::write(&data, "100\t0\n1\t1200\n10\t10\n").unwrap();
        fs::write(&labels, "0\n1\n").unwrap();

        assert!(matches!(
            FailurePredictor::from_files(&data, &labels),
            Err(PredictorError::TrainingData(TrainingDataError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn test_too_few_samples_fails_construction() {
        let set = TrainingSet::new(vec![FeatureVector::new(1, 1), FeatureVector::new(2, 2)], vec![0, 1]).unwrap();
        assert!(matches!(
            FailurePredictor::new(&set),
            Err(PredictorError::Model(ModelError::NotEnoughSamples { .. }))
        ));
    }

    #[test]
    fn test_from_config_reads_files() {
        let dir = tempdir().unwrap();
        let data: String = HISTORY.iter().map(|(t, d, _)| format!("{}\t{}\n", t, d)).collect();
        let labels: String = HISTORY.iter().map(|(_, _, l)| format!("{}\n", l)).collect();
        let config = PredictorConfig {
            data_file: dir.path().join("rows.tsv"),
            labels_file: dir.path().join("labels.tsv"),
            time_format: "%Y-%m-%d %H:%M:%S".to_string(),
            ..Default::default()
        };
        fs::write(&config.data_file, data).unwrap();
        fs::write(&config.labels_file, labels).unwrap();

        let pf = FailurePredictor::from_config(&config).unwrap();
        let info = pf.model_info().unwrap();
        assert_eq!(pf.classifier_name(), "knn");
        assert_eq!(info.samples, HISTORY.len());
        assert_eq!(info.dataset_hash, history().fingerprint());
        assert_eq!(pf.check_model(1, 1200).unwrap(), FailureLabel::Failure);
    }

    #[test]
    fn test_missing_files_fail_construction() {
        let config = PredictorConfig {
            data_file: "/nonexistent/compdata.txt".into(),
            ..Default::default()
        };
        assert!(matches!(
            FailurePredictor::from_config(&config),
            Err(PredictorError::TrainingData(TrainingDataError::Io { .. }))
        ));
    }

    /// Rejects every other call to exercise error propagation
    struct Flaky {
        calls: AtomicUsize,
    }

    impl Classifier for Flaky {
        fn name(&self) -> &'static str {
            "flaky"
        }

        fn classify(&self, _features: &FeatureVector) -> Result<FailureLabel, ModelError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) % 2 == 1 {
                Err(ModelError::Other("rejected".to_string()))
            } else {
                Ok(FailureLabel::Failure)
            }
        }
    }

    #[test]
    fn test_failed_prediction_leaves_queue_intact() {
        let pf = FailurePredictor::with_classifier(Box::new(Flaky { calls: AtomicUsize::new(0) }));

        pf.predict("m1", 0, 0).unwrap();
        assert!(matches!(pf.predict("m2", 0, 0), Err(PredictorError::Model(_))));
        pf.predict("m3", 0, 0).unwrap();

        assert!(pf.model_info().is_none());
        assert_eq!(drain(&pf.get_alert_queue()), vec!["m1", "m3"]);
    }
}
