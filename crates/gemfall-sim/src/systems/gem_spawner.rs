//! Gem spawning system: steps the spawner loop against the world.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use gemfall_core::events::SpawnEvent;

use crate::spawner::GemSpawner;
use crate::world_setup::WorldHost;

/// Step the spawner at `current_tick`, spawning any due batch into `world`.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut GemSpawner,
    current_tick: u64,
    events: &mut Vec<SpawnEvent>,
) -> usize {
    let mut host = WorldHost {
        world,
        tick: current_tick,
    };
    spawner.step(current_tick, rng, &mut host, events)
}
