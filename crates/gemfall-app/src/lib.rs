//! GEMFALL host application.
//!
//! This crate runs the simulation engine on a real-time game loop thread
//! and exposes start/command/snapshot handlers to the CLI.

pub mod control;
pub mod error;
pub mod game_loop;
pub mod state;

pub use gemfall_core as core;
