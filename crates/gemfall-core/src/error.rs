//! Configuration errors surfaced when the spawner is started.

use thiserror::Error;

/// Everything that can be wrong with a spawner configuration.
///
/// Detected once, before the loop starts; the loop never begins with a bad
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gem catalog is empty")]
    EmptyCatalog,

    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: String,
        max: String,
    },

    #[error("delay range [{min}, {max}) must be finite and non-negative")]
    InvalidDelay { min: f64, max: f64 },

    #[error("delay range [{min}, {max}) holds no whole number of seconds")]
    NoWholeSecondDelay { min: f64, max: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn inverted<T: std::fmt::Display>(name: &'static str, min: T, max: T) -> Self {
        Self::InvertedRange {
            name,
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
