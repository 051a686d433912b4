//! Control handlers used by the CLI host.
//!
//! They bridge host requests to the game loop thread via channels.

use log::info;

use gemfall_core::commands::ControlCommand;
use gemfall_core::state::SpawnerSnapshot;
use gemfall_sim::engine::SimulationEngine;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Activate `engine` and start the game loop thread.
///
/// An invalid spawner configuration fails here, before any thread exists.
pub fn start_simulation(state: &AppState, mut engine: SimulationEngine) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    engine.activate()?;

    let (cmd_tx, handle) = game_loop::spawn_game_loop(engine, state.latest_snapshot.clone())
        .map_err(AppError::Spawn)?;

    *state.command_tx.lock().map_err(|_| AppError::LockPoisoned)? = Some(cmd_tx);
    *state.loop_thread.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
    *running = true;

    info!("simulation started");
    Ok(())
}

/// Forward a control command to the simulation.
pub fn send_command(state: &AppState, command: ControlCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::Control(command))
            .map_err(|_| AppError::LoopClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Get the latest snapshot (for polling).
pub fn get_snapshot(state: &AppState) -> Result<Option<SpawnerSnapshot>, AppError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| AppError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for the thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if !*running {
        return Err(AppError::NotStarted);
    }

    if let Some(tx) = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take()
    {
        // A closed channel means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }

    let handle = state
        .loop_thread
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take();
    if let Some(handle) = handle {
        handle.join().map_err(|_| AppError::LoopClosed)?;
    }

    *running = false;
    info!("simulation stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use gemfall_core::config::SpawnerConfig;
    use gemfall_core::enums::LifecyclePhase;
    use gemfall_sim::engine::SimConfig;

    fn engine(spawner: SpawnerConfig) -> SimulationEngine {
        SimulationEngine::new(SimConfig {
            seed: 3,
            spawner,
        })
    }

    #[test]
    fn test_commands_rejected_before_start() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, ControlCommand::Pause),
            Err(AppError::NotStarted)
        ));
        assert!(matches!(stop_simulation(&state), Err(AppError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_bad_config_fails_before_loop_starts() {
        let state = AppState::new();
        let result = start_simulation(
            &state,
            engine(SpawnerConfig {
                catalog: Vec::new(),
                ..Default::default()
            }),
        );

        assert!(matches!(result, Err(AppError::Config(_))));
        assert!(!*state.running.lock().unwrap());
        assert!(state.loop_thread.lock().unwrap().is_none());
    }

    #[test]
    fn test_start_pause_stop() {
        let state = AppState::new();
        start_simulation(&state, engine(SpawnerConfig::default())).unwrap();
        assert!(matches!(
            start_simulation(&state, engine(SpawnerConfig::default())),
            Err(AppError::AlreadyRunning)
        ));

        send_command(&state, ControlCommand::Pause).unwrap();
        std::thread::sleep(Duration::from_millis(150));
        let snap = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snap.phase, LifecyclePhase::Paused);

        stop_simulation(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(matches!(
            send_command(&state, ControlCommand::Resume),
            Err(AppError::NotStarted)
        ));
    }
}
