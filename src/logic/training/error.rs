use std::path::PathBuf;

#[derive(Debug)]
pub enum TrainingDataError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    InvalidLabel {
        row: usize,
        value: i64,
    },
    LengthMismatch {
        samples: usize,
        labels: usize,
    },
    Empty,
}

impl std::fmt::Display for TrainingDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingDataError::Io { path, source } => {
                write!(f, "Cannot read training data {}: {}", path.display(), source)
            }
            TrainingDataError::Parse { path, line, message } => {
                write!(f, "Malformed training data {} line {}: {}", path.display(), line, message)
            }
            TrainingDataError::InvalidLabel { row, value } => {
                write!(f, "Invalid label {} at row {} (expected 0 or 1)", value, row)
            }
            TrainingDataError::LengthMismatch { samples, labels } => {
                write!(f, "Training data mismatch: {} samples but {} labels", samples, labels)
            }
            TrainingDataError::Empty => write!(f, "Training data is empty"),
        }
    }
}

impl std::error::Error for TrainingDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrainingDataError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
