//! Game loop thread: runs the simulation engine at `TICK_RATE` and publishes snapshots.
//!
//! The engine is activated by the caller before it is moved into the thread,
//! so configuration errors surface before the loop exists. Commands arrive
//! via `mpsc` channel. Snapshots are stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use gemfall_core::constants::TICK_RATE;
use gemfall_core::state::SpawnerSnapshot;
use gemfall_sim::engine::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the control layer and the thread handle.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: Arc<Mutex<Option<SpawnerSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("gemfall-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SpawnerSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Control(cmd)) => {
                    debug!("control command: {cmd:?}");
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("game loop stopping at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        for event in &snapshot.events {
            info!(
                "[{:>7.2}s] {} at y={}",
                event.tick as f64 / TICK_RATE as f64,
                event.template,
                event.position.y
            );
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemfall_core::commands::ControlCommand;
    use gemfall_core::enums::LifecyclePhase;
    use gemfall_sim::engine::SimConfig;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Control(ControlCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Control(ControlCommand::Resume))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Control(ControlCommand::Pause)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Control(ControlCommand::Resume)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.activate().unwrap();
        let latest = Arc::new(Mutex::new(None));

        let (tx, handle) = spawn_game_loop(engine, latest.clone()).unwrap();
        std::thread::sleep(Duration::from_millis(200));

        {
            let lock = latest.lock().unwrap();
            let snap = lock.as_ref().expect("loop should have ticked");
            assert_eq!(snap.phase, LifecyclePhase::Active);
            assert!(snap.time.tick > 0);
            assert_eq!(snap.gem_count, 1, "first batch fires on the first tick");
        }

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_loop_stops_when_sender_dropped() {
        let engine = SimulationEngine::new(SimConfig::default());
        let (tx, handle) = spawn_game_loop(engine, Arc::new(Mutex::new(None))).unwrap();
        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
