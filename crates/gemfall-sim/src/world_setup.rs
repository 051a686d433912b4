//! Entity spawn factories: how a gem template becomes an entity in the world.

use hecs::{Entity, World};

use gemfall_core::components::{Gem, SpawnedAt};
use gemfall_core::config::GemTemplate;
use gemfall_core::types::{Orientation, Position};

use crate::spawner::SpawnHost;

/// Spawn a single gem entity from `template`.
pub fn spawn_gem(
    world: &mut World,
    template: &GemTemplate,
    template_index: usize,
    position: Position,
    orientation: Orientation,
    tick: u64,
) -> Entity {
    world.spawn((
        Gem {
            template_index,
            name: template.name.clone(),
            value: template.value,
        },
        position,
        orientation,
        SpawnedAt { tick },
    ))
}

/// The ECS world as seen by the spawner during one tick.
pub struct WorldHost<'w> {
    pub world: &'w mut World,
    pub tick: u64,
}

impl SpawnHost for WorldHost<'_> {
    type Handle = Entity;

    fn instantiate(
        &mut self,
        template: &GemTemplate,
        template_index: usize,
        position: Position,
        orientation: Orientation,
    ) -> Entity {
        spawn_gem(
            self.world,
            template,
            template_index,
            position,
            orientation,
            self.tick,
        )
    }
}
