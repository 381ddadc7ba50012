//! Entity state records stored in the simulation pools.
//!
//! Components are plain data structs. Game logic lives in the simulation
//! systems, not here. Pooled records implement `Default` so a pool can
//! allocate fresh slots; recycled slots keep their previous values until
//! the spawning system overwrites every field.

use serde::{Deserialize, Serialize};

use crate::enums::{AirplaneKind, LifeState};
use crate::types::Vector2D;

/// Fire-control state owned 1:1 by an airplane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Selects the weapon and bullet parameters.
    pub kind: AirplaneKind,
}

/// A player or enemy airplane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airplane {
    pub kind: AirplaneKind,
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Facing in radians.
    pub rotation: f64,
    /// Revolutions per second, signed (positive = clockwise on screen).
    pub angular_speed: f64,
    pub health: f64,
    pub life: LifeState,
    /// Simulation time (ms) of the last shot; `None` if it never fired.
    pub last_bullet_ms: Option<f64>,
    pub weapon: Weapon,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Who fired it; selects the bullet parameters and the opposing side.
    pub kind: AirplaneKind,
    pub position: Vector2D,
    /// Heading in radians.
    pub direction: f64,
    pub created_ms: f64,
}

/// A short-lived muzzle flash or impact effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spark {
    pub position: Vector2D,
    pub spawn_ms: f64,
}

/// Where the view is centred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vector2D,
}
