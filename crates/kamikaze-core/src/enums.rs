//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side an airplane (and its weapon and bullets) belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirplaneKind {
    #[default]
    Player,
    Enemy,
}

/// Damage state of an airplane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    /// Health above zero.
    #[default]
    Alive,
    /// Health reached zero. Terminal.
    Dead,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// The player airplane was destroyed. Systems no longer run.
    GameOver,
}

/// How an enemy turns a misalignment angle into a rotation signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteeringMode {
    /// Feed the signed angle itself: larger misalignment turns harder.
    #[default]
    Proportional,
    /// Feed only the sign of the angle: -1, 0, or +1.
    Ternary,
}
