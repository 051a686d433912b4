//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! `Position` and `Orientation` from `types` double as components.

use serde::{Deserialize, Serialize};

/// A collectible gem instantiated from a catalog template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gem {
    /// Index of the template in the spawner catalog.
    pub template_index: usize,
    pub name: String,
    /// Points awarded on collection.
    pub value: u32,
}

/// Tick at which the entity was instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedAt {
    pub tick: u64,
}
