//! Simulation constants and reference spawner tuning.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Default RNG seed when none is supplied.
pub const DEFAULT_SEED: u64 = 42;

// --- Spawn line ---

/// Horizontal coordinate every gem spawns at.
pub const SPAWN_LINE_X: f64 = 26.0;

/// Depth coordinate every gem spawns at.
pub const SPAWN_DEPTH_Z: f64 = 10.0;

/// Vertical spawn offset range, half-open.
pub const VERTICAL_RANGE: (i32, i32) = (-10, 10);

// --- Cadence ---

/// Gems per batch, half-open.
///
/// NOTE: `[1, 2)` always draws exactly 1. Kept as a range so the batch size
/// stays configurable; the reference cadence spawns one gem per firing.
pub const BATCH_SIZE_RANGE: (u32, u32) = (1, 2);

/// Wait between batches in seconds, half-open.
pub const DELAY_RANGE_SECS: (f64, f64) = (3.0, 5.0);

/// Slack used when converting a delay in seconds to whole ticks, so that
/// `3.0 * 30` does not round up to 91 through float error.
pub const TICK_EPSILON: f64 = 1e-9;

// --- Catalog ---

/// Reference gem catalog: (name, point value).
pub const DEFAULT_CATALOG: [(&str, u32); 2] = [("Ruby", 10), ("Sapphire", 25)];
