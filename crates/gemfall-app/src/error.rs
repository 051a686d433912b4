//! Errors surfaced by the host application.

use thiserror::Error;

use gemfall_core::error::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation not started")]
    NotStarted,

    #[error("game loop has shut down")]
    LoopClosed,

    #[error("shared state lock poisoned")]
    LockPoisoned,

    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
