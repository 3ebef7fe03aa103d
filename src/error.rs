//! Error types for the motion statistics engine.

use thiserror::Error;

/// Statistics engine error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A statistic was requested over a zero-length sequence.
    #[error("empty input: statistics require at least one value")]
    EmptyInput,
}

/// Configuration loading error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Crate-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A line of a recorded sample log could not be parsed.
    #[error("sample log line {line}: {reason}")]
    SampleParse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
