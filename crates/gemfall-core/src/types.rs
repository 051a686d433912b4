//! Fundamental geometric and simulation types.

use glam::DQuat;
use serde::{Deserialize, Serialize};

/// 3D position in scene space.
/// x = along the scroll axis, y = up, z = depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Rotation of a spawned entity. Gems always spawn with the identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation(pub DQuat);

impl Default for Orientation {
    fn default() -> Self {
        Self(DQuat::IDENTITY)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each active tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Half-open range `[min, max)` used for every random draw the spawner makes.
///
/// `min == max` is a degenerate range that always yields `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfOpenRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> HalfOpenRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Whether `min > max`.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Whether the range collapses to the single value `min`.
    pub fn is_degenerate(&self) -> bool {
        self.min >= self.max
    }

    /// Whether `value` lies in `[min, max)`, or equals `min` for a degenerate range.
    pub fn contains(&self, value: T) -> bool {
        if self.is_degenerate() {
            value == self.min
        } else {
            value >= self.min && value < self.max
        }
    }
}

impl<T> From<(T, T)> for HalfOpenRange<T> {
    fn from((min, max): (T, T)) -> Self {
        Self { min, max }
    }
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Orientation {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        self.0.abs_diff_eq(DQuat::IDENTITY, 1e-12)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }

    /// Simulated seconds covered by `ticks` ticks.
    pub fn ticks_to_secs(ticks: u64) -> f64 {
        ticks as f64 * crate::constants::DT
    }

    /// Whole ticks needed to cover `secs` seconds (rounded up).
    pub fn secs_to_ticks(secs: f64) -> u64 {
        let ticks = secs * crate::constants::TICK_RATE as f64 - crate::constants::TICK_EPSILON;
        ticks.ceil().max(0.0) as u64
    }
}
