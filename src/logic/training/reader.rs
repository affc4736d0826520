//! Tab-separated training file reader
//!
//! Data file: `<temperature>\t<disk_errors>` per line.
//! Label file: `<0|1>` per line.
//! Line numbers in errors are 1-based.

use std::fs;
use std::path::Path;

use crate::constants::FIELD_DELIMITER;
use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use super::error::TrainingDataError;

/// Read feature rows from a data file
pub fn read_samples(path: &Path) -> Result<Vec<FeatureVector>, TrainingDataError> {
    let content = read_file(path)?;
    parse_samples(&content, path)
}

/// Read raw integer labels from a label file
pub fn read_labels(path: &Path) -> Result<Vec<i64>, TrainingDataError> {
    let content = read_file(path)?;
    parse_labels(&content, path)
}

pub(crate) fn parse_samples(content: &str, path: &Path) -> Result<Vec<FeatureVector>, TrainingDataError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let fields = parse_fields(line, FEATURE_COUNT, path, i + 1)?;
            Ok(FeatureVector::new(fields[0], fields[1]))
        })
        .collect()
}

pub(crate) fn parse_labels(content: &str, path: &Path) -> Result<Vec<i64>, TrainingDataError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| Ok(parse_fields(line, 1, path, i + 1)?[0]))
        .collect()
}

fn read_file(path: &Path) -> Result<String, TrainingDataError> {
    fs::read_to_string(path).map_err(|source| TrainingDataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_fields(
    line: &str,
    expected: usize,
    path: &Path,
    line_no: usize,
) -> Result<Vec<i64>, TrainingDataError> {
    let malformed = |message: String| TrainingDataError::Parse {
        path: path.to_path_buf(),
        line: line_no,
        message,
    };

    if line.trim().is_empty() {
        return Err(malformed("empty line".to_string()));
    }

    let values = line
        .split(FIELD_DELIMITER)
        .map(|field| {
            let field = field.trim();
            field
                .parse::<i64>()
                .map_err(|_| malformed(format!("'{}' is not an integer", field)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() != expected {
        return Err(malformed(format!(
            "expected {} field(s), found {}",
            expected,
            values.len()
        )));
    }

    Ok(values)
}
