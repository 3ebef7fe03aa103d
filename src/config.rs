//! Session configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! sample_rate_hz = 20.0
//! report_interval_ms = 5000
//! initial_was_positive = true
//! reset_crossings_each_interval = false
//!
//! [window_policy]
//! kind = "sliding"
//! max_samples = 100
//!
//! [classifier]
//! slash_rotation_threshold = 3.5
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::classifier::ClassifierConfig;
use crate::error::ConfigError;

/// What happens to the sample window after each report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Clear the window after every report.
    #[default]
    ResetEachInterval,
    /// Keep every sample since the session started.
    Cumulative,
    /// Keep only the latest `max_samples` readings.
    Sliding { max_samples: usize },
}

/// Configuration for a [`MotionSession`](crate::session::MotionSession).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Nominal sensor sample rate (Hz). Sizes the window up front;
    /// reporting is driven by sample timestamps.
    pub sample_rate_hz: f64,

    /// Time between statistics reports (ms).
    pub report_interval_ms: u64,

    /// Window handling between reports.
    pub window_policy: WindowPolicy,

    /// Initial sign state of every zero-crossing tracker.
    pub initial_was_positive: bool,

    /// Restart crossing counts at every report instead of counting for the
    /// whole session.
    pub reset_crossings_each_interval: bool,

    /// Gesture thresholds.
    pub classifier: ClassifierConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 20.0,      // 50ms sensor cadence
            report_interval_ms: 5000,  // labels refresh every 5s
            window_policy: WindowPolicy::ResetEachInterval,
            initial_was_positive: true,
            reset_crossings_each_interval: false,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!("loaded session config from {}", path.display());
        Ok(config)
    }

    /// Rejects settings the session cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_hz.is_nan() || self.sample_rate_hz <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "sample_rate_hz must be positive, got {}",
                self.sample_rate_hz
            )));
        }
        if self.report_interval_ms == 0 {
            return Err(ConfigError::Invalid("report_interval_ms must be non-zero".into()));
        }
        if let WindowPolicy::Sliding { max_samples: 0 } = self.window_policy {
            return Err(ConfigError::Invalid("sliding window needs max_samples > 0".into()));
        }
        Ok(())
    }

    /// Expected number of samples per report at the nominal rate.
    pub fn samples_per_report(&self) -> usize {
        ((self.report_interval_ms as f64 / 1000.0) * self.sample_rate_hz).round() as usize
    }
}
