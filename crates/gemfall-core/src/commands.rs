//! Control commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary. Activation is
//! not a command: it can fail, so the host calls `activate` directly and
//! handles the error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    /// Freeze time; the spawn cadence resumes where it left off.
    Pause,
    /// Unfreeze time.
    Resume,
    /// Cancel the spawn loop. Already spawned gems are left alone.
    Deactivate,
}
