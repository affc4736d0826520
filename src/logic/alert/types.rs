use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A predicted failure for one machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unix timestamp in seconds
    pub time: f64,
    /// Machine identifier
    pub name: String,
}

impl Alert {
    /// Stamp an alert with the current wall-clock time
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now().timestamp_micros() as f64 / 1_000_000.0;
        Self::at(now, name)
    }

    pub fn at(time: f64, name: impl Into<String>) -> Self {
        Self {
            time,
            name: name.into(),
        }
    }

    /// Timestamp in the local timezone; None if out of range
    pub fn local_time(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp_millis((self.time * 1000.0) as i64)
            .map(|utc| utc.with_timezone(&Local))
    }
}
