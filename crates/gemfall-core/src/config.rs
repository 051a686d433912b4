//! Spawner configuration: the gem catalog plus placement and cadence ranges.
//!
//! Every field has a serde default, so a config file only needs to name
//! what it overrides. `validate` is the single place configuration errors
//! are detected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::DelayMode;
use crate::error::ConfigError;
use crate::types::HalfOpenRange;

/// A blueprint the spawner can instantiate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GemTemplate {
    pub name: String,
    /// Points awarded when the gem is collected.
    #[serde(default)]
    pub value: u32,
}

impl GemTemplate {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Static spawner configuration, fixed before activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Templates eligible for spawning. Must be non-empty.
    pub catalog: Vec<GemTemplate>,
    pub spawn_line_x: f64,
    pub spawn_depth_z: f64,
    pub vertical_range: HalfOpenRange<i32>,
    pub batch_size_range: HalfOpenRange<u32>,
    /// Seconds between batches.
    pub delay_range: HalfOpenRange<f64>,
    pub delay_mode: DelayMode,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            spawn_line_x: SPAWN_LINE_X,
            spawn_depth_z: SPAWN_DEPTH_Z,
            vertical_range: VERTICAL_RANGE.into(),
            batch_size_range: BATCH_SIZE_RANGE.into(),
            delay_range: DELAY_RANGE_SECS.into(),
            delay_mode: DelayMode::default(),
        }
    }
}

/// The reference two-gem catalog.
pub fn default_catalog() -> Vec<GemTemplate> {
    DEFAULT_CATALOG
        .iter()
        .map(|&(name, value)| GemTemplate::new(name, value))
        .collect()
}

impl SpawnerConfig {
    /// Check every invariant the spawn loop relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.vertical_range.is_inverted() {
            return Err(ConfigError::inverted(
                "vertical",
                self.vertical_range.min,
                self.vertical_range.max,
            ));
        }
        if self.batch_size_range.is_inverted() {
            return Err(ConfigError::inverted(
                "batch size",
                self.batch_size_range.min,
                self.batch_size_range.max,
            ));
        }

        let HalfOpenRange { min, max } = self.delay_range;
        if !min.is_finite() || !max.is_finite() || min < 0.0 {
            return Err(ConfigError::InvalidDelay { min, max });
        }
        if self.delay_range.is_inverted() {
            return Err(ConfigError::inverted("delay", min, max));
        }
        if self.delay_mode == DelayMode::WholeSeconds && !has_whole_second(self.delay_range) {
            return Err(ConfigError::NoWholeSecondDelay { min, max });
        }
        Ok(())
    }

    /// Parse a JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SpawnerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Whether `range` can produce an integer number of seconds.
fn has_whole_second(range: HalfOpenRange<f64>) -> bool {
    if range.is_degenerate() {
        range.min.fract() == 0.0
    } else {
        range.min.ceil() < range.max.ceil()
    }
}
