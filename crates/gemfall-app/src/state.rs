//! Application state shared between the control handlers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use gemfall_core::commands::ControlCommand;
use gemfall_core::state::SpawnerSnapshot;

/// Commands sent from the control layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A control command to forward to the simulation engine.
    Control(ControlCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds state that does not exist before `start_simulation`
/// - `Arc<Mutex<...>>` holds the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to the game loop thread.
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<SpawnerSnapshot>>>,
    /// Game loop thread, joined on shutdown.
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
