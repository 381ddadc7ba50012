//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

pub use crate::vector::Vector2D;

/// Simulation time tracking.
///
/// All cooldowns and lifespans are measured against this clock, never
/// against wall-clock time, so a replay with the same inputs and deltas
/// produces the same simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Elapsed simulation time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.elapsed_secs * 1000.0
    }

    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
