//! Inputs sent from the driver to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Steering and trigger intent for the player airplane, sampled once per tick.
///
/// Produced by whatever binds keys or gamepads; the simulation never sees raw
/// key codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub turn_clockwise: bool,
    pub turn_counterclockwise: bool,
    pub fire: bool,
}

impl InputIntent {
    /// -1, 0, or +1. Both turn flags held cancel out.
    pub fn rotation_sign(&self) -> f64 {
        let mut sign = 0.0;
        if self.turn_clockwise {
            sign += 1.0;
        }
        if self.turn_counterclockwise {
            sign -= 1.0;
        }
        sign
    }
}

/// All possible driver actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace the held input intent.
    SetIntent { intent: InputIntent },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Rebuild the world from the configured seed.
    Restart,
}
