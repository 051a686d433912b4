//! Enumerations used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle of the spawner's owner, as driven by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Not activated yet, or deactivated. No spawner loop exists.
    #[default]
    Inactive,
    /// Loop running; ticks advance time.
    Active,
    /// Loop exists but time is frozen.
    Paused,
}

/// Which part of the spawn loop the spawner is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpawnerPhase {
    /// Will issue a batch on the next step.
    #[default]
    Spawning,
    /// Suspended until the next fire tick.
    Waiting,
}

/// How the inter-batch delay is drawn from its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DelayMode {
    /// Whole seconds in `[min, max)`, e.g. 3 or 4 for `[3, 5)`.
    #[default]
    WholeSeconds,
    /// Any real number of seconds in `[min, max)`.
    Fractional,
}
