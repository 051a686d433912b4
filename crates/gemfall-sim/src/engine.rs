//! Simulation engine: the host side of the spawner.
//!
//! `SimulationEngine` owns the hecs ECS world, the seeded RNG, the clock and
//! the spawner lifecycle. It processes control commands, runs systems, and
//! produces `SpawnerSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gemfall_core::commands::ControlCommand;
use gemfall_core::config::SpawnerConfig;
use gemfall_core::constants::DEFAULT_SEED;
use gemfall_core::enums::LifecyclePhase;
use gemfall_core::error::ConfigError;
use gemfall_core::events::SpawnEvent;
use gemfall_core::state::{GemView, SpawnerSnapshot};
use gemfall_core::types::SimTime;

use crate::spawner::{GemSpawner, SpawnerState};
use crate::systems;
use crate::systems::snapshot::GemTally;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawn sequence.
    pub seed: u64,
    pub spawner: SpawnerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            spawner: SpawnerConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: LifecyclePhase,
    rng: ChaCha8Rng,
    config: SpawnerConfig,
    /// `None` while inactive; dropping it cancels the loop.
    spawner: Option<GemSpawner>,
    command_queue: VecDeque<ControlCommand>,
    spawn_events: Vec<SpawnEvent>,
    tally: GemTally,
}

impl SimulationEngine {
    /// Create an inactive engine. The configuration is not checked until
    /// `activate`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: LifecyclePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.spawner,
            spawner: None,
            command_queue: VecDeque::new(),
            spawn_events: Vec::new(),
            tally: GemTally::default(),
        }
    }

    /// Start the spawn loop. Fails without touching the world if the
    /// configuration is invalid. A no-op if the loop already exists.
    pub fn activate(&mut self) -> Result<(), ConfigError> {
        if self.spawner.is_some() {
            return Ok(());
        }

        let spawner = GemSpawner::new(self.config.clone()).map_err(|e| {
            warn!("spawner activation rejected: {e}");
            e
        })?;

        info!(
            "spawner activated at tick {} with {} template(s)",
            self.time.tick,
            self.config.catalog.len()
        );
        self.spawner = Some(spawner);
        self.phase = LifecyclePhase::Active;
        Ok(())
    }

    /// Cancel the spawn loop immediately. Spawned gems stay in the world.
    pub fn deactivate(&mut self) {
        if self.spawner.take().is_some() {
            info!("spawner deactivated at tick {}", self.time.tick);
        }
        self.phase = LifecyclePhase::Inactive;
    }

    /// Queue a control command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ControlCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ControlCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SpawnerSnapshot {
        self.process_commands();

        if self.phase == LifecyclePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.spawn_events);
        systems::snapshot::build_snapshot(
            &self.time,
            self.phase,
            self.spawner.as_ref(),
            self.tally,
            events,
        )
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Every gem in the world, oldest first. Walks the whole world, so
    /// hosts call it on demand rather than per tick.
    pub fn gems(&self) -> Vec<GemView> {
        systems::snapshot::build_gems(&self.world)
    }

    /// The spawner configuration used on activation.
    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    /// State of the spawn loop, `None` while inactive.
    pub fn spawner_state(&self) -> Option<SpawnerState> {
        self.spawner.as_ref().map(GemSpawner::state)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single control command.
    fn handle_command(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Pause => {
                if self.phase == LifecyclePhase::Active {
                    info!("paused at tick {}", self.time.tick);
                    self.phase = LifecyclePhase::Paused;
                }
            }
            ControlCommand::Resume => {
                if self.phase == LifecyclePhase::Paused {
                    info!("resumed at tick {}", self.time.tick);
                    self.phase = LifecyclePhase::Active;
                }
            }
            ControlCommand::Deactivate => self.deactivate(),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Gem spawning
        if let Some(spawner) = self.spawner.as_mut() {
            let first_new = self.spawn_events.len();
            systems::gem_spawner::run(
                &mut self.world,
                &mut self.rng,
                spawner,
                self.time.tick,
                &mut self.spawn_events,
            );
            self.tally.record(&self.spawn_events[first_new..], &self.config);
        }
    }
}
