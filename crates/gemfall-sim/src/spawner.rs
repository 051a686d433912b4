//! Gem spawner: fires a random-sized batch of gems, then waits a random delay.
//!
//! The loop is an explicit state object advanced once per tick. Waiting is
//! "do nothing until `now >= next_fire_tick`"; cancelling the loop is just
//! dropping the `GemSpawner`.

use log::{debug, trace};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gemfall_core::config::{GemTemplate, SpawnerConfig};
use gemfall_core::enums::{DelayMode, SpawnerPhase};
use gemfall_core::error::ConfigError;
use gemfall_core::events::SpawnEvent;
use gemfall_core::state::SpawnerView;
use gemfall_core::types::{HalfOpenRange, Orientation, Position, SimTime};

/// Where newly spawned gems go. Implemented by the ECS world; tests use a
/// recording host.
pub trait SpawnHost {
    type Handle;

    fn instantiate(
        &mut self,
        template: &GemTemplate,
        template_index: usize,
        position: Position,
        orientation: Orientation,
    ) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnerState {
    /// Issue a batch on the next step.
    Spawning,
    /// Suspended until `next_fire_tick`.
    Waiting { next_fire_tick: u64 },
}

#[derive(Debug, Clone)]
pub struct GemSpawner {
    config: SpawnerConfig,
    state: SpawnerState,
    batches: u64,
    spawned: u64,
}

impl GemSpawner {
    /// Validate `config` and start in `Spawning`.
    pub fn new(config: SpawnerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SpawnerState::Spawning,
            batches: 0,
            spawned: 0,
        })
    }

    pub fn state(&self) -> SpawnerState {
        self.state
    }

    /// Tick of the next batch, if waiting.
    pub fn next_fire_tick(&self) -> Option<u64> {
        match self.state {
            SpawnerState::Spawning => None,
            SpawnerState::Waiting { next_fire_tick } => Some(next_fire_tick),
        }
    }

    pub fn batches(&self) -> u64 {
        self.batches
    }

    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    pub fn view(&self) -> SpawnerView {
        let (phase, next_fire_tick) = match self.state {
            SpawnerState::Spawning => (SpawnerPhase::Spawning, 0),
            SpawnerState::Waiting { next_fire_tick } => (SpawnerPhase::Waiting, next_fire_tick),
        };
        SpawnerView {
            phase,
            next_fire_tick,
            batches: self.batches,
            spawned: self.spawned,
        }
    }

    /// Advance the loop to `now_tick`. Returns the number of gems issued,
    /// which is 0 while waiting.
    ///
    /// At most one batch fires per step, even for a zero delay.
    pub fn step<H: SpawnHost>(
        &mut self,
        now_tick: u64,
        rng: &mut ChaCha8Rng,
        host: &mut H,
        events: &mut Vec<SpawnEvent>,
    ) -> usize {
        if let SpawnerState::Waiting { next_fire_tick } = self.state {
            if now_tick < next_fire_tick {
                return 0;
            }
        }

        let count = self.spawn_batch(now_tick, rng, host, events);

        let delay_secs = draw_delay_secs(rng, self.config.delay_range, self.config.delay_mode);
        let next_fire_tick = now_tick.saturating_add(delay_to_ticks(delay_secs));
        self.state = SpawnerState::Waiting { next_fire_tick };

        debug!(
            "tick {now_tick}: batch of {count}, next in {delay_secs}s (tick {next_fire_tick})"
        );
        count
    }

    fn spawn_batch<H: SpawnHost>(
        &mut self,
        now_tick: u64,
        rng: &mut ChaCha8Rng,
        host: &mut H,
        events: &mut Vec<SpawnEvent>,
    ) -> usize {
        let batch_size = draw_batch_size(rng, self.config.batch_size_range);

        for _ in 0..batch_size {
            let index = draw_template_index(rng, self.config.catalog.len());
            let y = draw_vertical_offset(rng, self.config.vertical_range);
            let template = &self.config.catalog[index];
            let position = Position::new(
                self.config.spawn_line_x,
                y as f64,
                self.config.spawn_depth_z,
            );

            host.instantiate(template, index, position, Orientation::identity());
            trace!("spawned {} at {:?}", template.name, position);

            events.push(SpawnEvent {
                tick: now_tick,
                template_index: index,
                template: template.name.clone(),
                position,
            });
        }

        self.batches += 1;
        self.spawned += batch_size as u64;
        batch_size as usize
    }
}

/// Number of gems in the next batch.
pub fn draw_batch_size(rng: &mut ChaCha8Rng, range: HalfOpenRange<u32>) -> u32 {
    if range.is_degenerate() {
        range.min
    } else {
        rng.gen_range(range.min..range.max)
    }
}

/// Uniform catalog index. `len` must be non-zero.
pub fn draw_template_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    rng.gen_range(0..len)
}

/// Vertical offset of one gem.
pub fn draw_vertical_offset(rng: &mut ChaCha8Rng, range: HalfOpenRange<i32>) -> i32 {
    if range.is_degenerate() {
        range.min
    } else {
        rng.gen_range(range.min..range.max)
    }
}

/// Seconds to wait before the next batch.
///
/// `WholeSeconds` always yields an integer. A range holding no integer
/// (rejected by `SpawnerConfig::validate`) yields `min` rounded up.
pub fn draw_delay_secs(rng: &mut ChaCha8Rng, range: HalfOpenRange<f64>, mode: DelayMode) -> f64 {
    match mode {
        DelayMode::WholeSeconds => {
            let (lo, hi) = (range.min.ceil() as i64, range.max.ceil() as i64);
            if lo < hi {
                rng.gen_range(lo..hi) as f64
            } else {
                range.min.ceil()
            }
        }
        DelayMode::Fractional if range.is_degenerate() => range.min,
        DelayMode::Fractional => rng.gen_range(range.min..range.max),
    }
}

/// Whole ticks covering `delay_secs`.
pub fn delay_to_ticks(delay_secs: f64) -> u64 {
    SimTime::secs_to_ticks(delay_secs)
}
