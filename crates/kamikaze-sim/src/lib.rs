//! Simulation engine for kamikaze.
//!
//! Owns the entity pools and per-tick systems, advances the world on a fixed
//! step, and produces `FrameSnapshot`s for whatever draws them.

pub mod arena;
pub mod config;
pub mod engine;
pub mod pool;
pub mod state;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig, Tuning};
pub use engine::SimulationEngine;
pub use kamikaze_core as core;
