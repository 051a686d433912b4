//! Snapshot system: builds the per-tick `SpawnerSnapshot` and, on request,
//! the full gem listing from the ECS world.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use gemfall_core::components::{Gem, SpawnedAt};
use gemfall_core::config::SpawnerConfig;
use gemfall_core::enums::LifecyclePhase;
use gemfall_core::events::SpawnEvent;
use gemfall_core::state::{GemView, SpawnerSnapshot};
use gemfall_core::types::{Position, SimTime};

use crate::spawner::GemSpawner;

/// Running totals over every gem spawned into the world.
///
/// Kept up to date from spawn events so a snapshot costs the same no matter
/// how many gems have accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GemTally {
    pub count: u64,
    pub total_value: u64,
}

impl GemTally {
    /// Fold newly spawned gems into the totals.
    pub fn record(&mut self, events: &[SpawnEvent], config: &SpawnerConfig) {
        for event in events {
            self.count += 1;
            if let Some(template) = config.catalog.get(event.template_index) {
                self.total_value += template.value as u64;
            }
        }
    }
}

/// Build the per-tick snapshot.
pub fn build_snapshot(
    time: &SimTime,
    phase: LifecyclePhase,
    spawner: Option<&GemSpawner>,
    tally: GemTally,
    events: Vec<SpawnEvent>,
) -> SpawnerSnapshot {
    SpawnerSnapshot {
        time: *time,
        phase,
        spawner: spawner.map(GemSpawner::view),
        gem_count: tally.count,
        total_value: tally.total_value,
        events,
    }
}

/// Every gem in the world, ordered by spawn tick then entity id.
pub fn build_gems(world: &World) -> Vec<GemView> {
    let mut gems: Vec<GemView> = world
        .query::<(&Gem, &Position, &SpawnedAt)>()
        .iter()
        .map(|(entity, (gem, pos, spawned))| GemView {
            id: entity.to_bits().get(),
            name: gem.name.clone(),
            value: gem.value,
            position: *pos,
            spawned_at_tick: spawned.tick,
        })
        .collect();

    gems.sort_by_key(|g| (g.spawned_at_tick, g.id));
    gems
}
