//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AirplaneKind;
use crate::types::Vector2D;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A weapon fired; `position` is the muzzle.
    ShotFired {
        shooter: AirplaneKind,
        position: Vector2D,
        direction: f64,
    },
    /// A bullet struck an airplane.
    AirplaneHit {
        target: AirplaneKind,
        damage: f64,
        remaining_health: f64,
    },
    /// An enemy's health reached zero and it left the pool.
    EnemyDestroyed { position: Vector2D },
    /// The player's health reached zero. The game is over.
    PlayerDestroyed,
}
