//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). Loop state they need is passed in by the engine.

pub mod gem_spawner;
pub mod snapshot;
