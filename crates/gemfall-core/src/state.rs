//! Snapshot of the simulation, built once per tick for the host.

use serde::{Deserialize, Serialize};

use crate::enums::{LifecyclePhase, SpawnerPhase};
use crate::events::SpawnEvent;
use crate::types::{Position, SimTime};

/// Complete observable state after a tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnerSnapshot {
    pub time: SimTime,
    pub phase: LifecyclePhase,
    /// `None` while inactive.
    pub spawner: Option<SpawnerView>,
    /// Gems in the world.
    pub gem_count: u64,
    /// Total point value of every gem in the world.
    pub total_value: u64,
    /// Gems spawned since the previous snapshot.
    pub events: Vec<SpawnEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnerView {
    pub phase: SpawnerPhase,
    /// Tick of the next batch; only meaningful while waiting.
    pub next_fire_tick: u64,
    /// Batches issued since activation.
    pub batches: u64,
    /// Gems issued since activation.
    pub spawned: u64,
}

/// One gem in the world, as returned by `SimulationEngine::gems`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GemView {
    pub id: u64,
    pub name: String,
    pub value: u32,
    pub position: Position,
    pub spawned_at_tick: u64,
}
