//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.

/// Number of neighbors consulted by the default classifier
pub const DEFAULT_NEIGHBORS: usize = 3;

/// Default training data file (two tab-separated integers per line)
pub const DEFAULT_DATA_FILE: &str = "compdata.txt";

/// Default training label file (one 0/1 value per line)
pub const DEFAULT_LABELS_FILE: &str = "compdata_true_errors.txt";

/// Default alert timestamp format (C locale date and time)
pub const DEFAULT_TIME_FORMAT: &str = "%c";

/// Field delimiter used by the training data files
pub const FIELD_DELIMITER: char = '\t';

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "failure-predict";

// ============================================
// Environment overrides
// ============================================

pub const ENV_NEIGHBORS: &str = "FAILURE_PREDICT_NEIGHBORS";
pub const ENV_DATA_FILE: &str = "FAILURE_PREDICT_DATA_FILE";
pub const ENV_LABELS_FILE: &str = "FAILURE_PREDICT_LABELS_FILE";
pub const ENV_TIME_FORMAT: &str = "FAILURE_PREDICT_TIME_FORMAT";

/// Get neighbor count from environment or use default
/// An unparseable value is logged and replaced by the default
pub fn get_neighbors() -> usize {
    match std::env::var(ENV_NEIGHBORS) {
        Ok(s) => s.trim().parse().unwrap_or_else(|_| {
            log::warn!(
                "Ignoring {}='{}': not a count, using {}",
                ENV_NEIGHBORS,
                s,
                DEFAULT_NEIGHBORS
            );
            DEFAULT_NEIGHBORS
        }),
        Err(_) => DEFAULT_NEIGHBORS,
    }
}

/// Get training data path from environment or use default
pub fn get_data_file() -> String {
    std::env::var(ENV_DATA_FILE)
        .unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string())
}

/// Get training label path from environment or use default
pub fn get_labels_file() -> String {
    std::env::var(ENV_LABELS_FILE)
        .unwrap_or_else(|_| DEFAULT_LABELS_FILE.to_string())
}

/// Get alert time format from environment or use default
pub fn get_time_format() -> String {
    std::env::var(ENV_TIME_FORMAT)
        .unwrap_or_else(|_| DEFAULT_TIME_FORMAT.to_string())
}
