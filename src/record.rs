//! Per-sample values handed to a persistence collaborator.
//!
//! The engine does not define a storage schema. It only supplies, for every
//! sample, the acceleration and the running crossing counts, keyed by a
//! unique timestamp string. JSON is provided for stores that want it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Sample;

/// Values to persist for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Unique key derived from the sample timestamp.
    pub key: String,
    pub timestamp_ms: u64,
    /// Acceleration [x, y, z] in g.
    pub acceleration: [f64; 3],
    /// Running zero-crossing counts [x, y, z] at the time of this sample.
    pub zero_crossings: [u64; 3],
}

impl SampleRecord {
    pub fn new(sample: &Sample, zero_crossings: [u64; 3]) -> Self {
        Self {
            key: Self::key_for(sample.timestamp_ms),
            timestamp_ms: sample.timestamp_ms,
            acceleration: sample.accel,
            zero_crossings,
        }
    }

    /// Record key for a timestamp: seconds with millisecond precision.
    pub fn key_for(timestamp_ms: u64) -> String {
        format!("{}.{:03}", timestamp_ms / 1000, timestamp_ms % 1000)
    }

    /// Encodes the record as a single JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_derived_from_timestamp() {
        assert_eq!(SampleRecord::key_for(1_519_600_000_050), "1519600000.050");
        assert_eq!(SampleRecord::key_for(7), "0.007");
    }

    #[test]
    fn test_record_copies_sample_values() {
        let sample = Sample::new(2_500, [0.1, -0.2, 0.3]);
        let record = SampleRecord::new(&sample, [1, 0, 4]);

        assert_eq!(record.key, "2.500");
        assert_eq!(record.timestamp_ms, 2_500);
        assert_eq!(record.acceleration, [0.1, -0.2, 0.3]);
        assert_eq!(record.zero_crossings, [1, 0, 4]);
    }

    #[test]
    fn test_json_field_names() {
        let record = SampleRecord::new(&Sample::new(1_000, [0.5, 0.0, -0.5]), [2, 3, 4]);
        let json = record.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["key"], "1.000");
        assert_eq!(value["zero_crossings"][2], 4);
        assert_eq!(SampleRecord::from_json(&json).unwrap(), record);
    }
}
