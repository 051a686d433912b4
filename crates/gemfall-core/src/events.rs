//! Events emitted by the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// One gem instantiated by the spawner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnEvent {
    pub tick: u64,
    pub template_index: usize,
    pub template: String,
    pub position: Position,
}
