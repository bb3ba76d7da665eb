use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single depth-to-water observation from a station's recorder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    /// Water level in meters below ground.
    pub water_level: f64,
}

impl Reading {
    pub fn new(timestamp: DateTime<Utc>, water_level: f64) -> Self {
        Self {
            timestamp,
            water_level,
        }
    }
}

/// Return the readings ordered by timestamp. Equal timestamps keep their input order.
pub fn sorted_by_time(readings: &[Reading]) -> Vec<Reading> {
    let mut sorted = readings.to_vec();
    sorted.sort_by_key(|r| r.timestamp);
    sorted
}
