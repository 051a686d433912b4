//! Simulation engine for GEMFALL.
//!
//! Owns the hecs ECS world, steps the gem spawner at a fixed tick rate,
//! and produces `SpawnerSnapshot`s for the host.

pub mod engine;
pub mod spawner;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use gemfall_core as core;
