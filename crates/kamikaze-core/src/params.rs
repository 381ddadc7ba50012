//! Immutable tuning records shared by every instance of a kind.
//!
//! Exactly one record of each type exists per side (player, enemy); entities
//! refer to them through their [`AirplaneKind`](crate::enums::AirplaneKind).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::SteeringMode;

/// Motion and durability parameters of an airplane kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirplaneParams {
    /// Revolutions per second squared.
    pub angular_acceleration: f64,
    /// Revolutions per second squared, applied while not steering.
    pub angular_deceleration: f64,
    /// Revolutions per second.
    pub max_angular_speed: f64,
    pub acceleration: f64,
    pub max_speed: f64,
    /// Per-axis drag (units/s²).
    pub deceleration: f64,
    pub full_health: f64,
    pub is_enemy: bool,
}

impl AirplaneParams {
    pub fn player() -> Self {
        Self {
            angular_acceleration: PLAYER_ANGULAR_ACCELERATION,
            angular_deceleration: PLAYER_ANGULAR_DECELERATION,
            max_angular_speed: PLAYER_MAX_ANGULAR_SPEED,
            acceleration: PLAYER_ACCELERATION,
            max_speed: PLAYER_MAX_SPEED,
            deceleration: PLAYER_DECELERATION,
            full_health: PLAYER_FULL_HEALTH,
            is_enemy: false,
        }
    }

    pub fn enemy() -> Self {
        Self {
            angular_acceleration: ENEMY_ANGULAR_ACCELERATION,
            angular_deceleration: ENEMY_ANGULAR_DECELERATION,
            max_angular_speed: ENEMY_MAX_ANGULAR_SPEED,
            acceleration: ENEMY_ACCELERATION,
            max_speed: ENEMY_MAX_SPEED,
            deceleration: ENEMY_DECELERATION,
            full_health: ENEMY_FULL_HEALTH,
            is_enemy: true,
        }
    }
}

/// Fire-control parameters of a weapon kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponParams {
    /// Minimum time between shots (ms).
    pub fire_cooldown_ms: f64,
    /// Full width of the random jitter around the facing (radians).
    pub spread_angle: f64,
}

impl WeaponParams {
    pub fn player() -> Self {
        Self {
            fire_cooldown_ms: PLAYER_FIRE_COOLDOWN_MS,
            spread_angle: PLAYER_SPREAD_ANGLE,
        }
    }

    pub fn enemy() -> Self {
        Self {
            fire_cooldown_ms: ENEMY_FIRE_COOLDOWN_MS,
            spread_angle: ENEMY_SPREAD_ANGLE,
        }
    }
}

/// Ballistic parameters of a bullet kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletParams {
    pub speed: f64,
    pub damage_on_impact: f64,
    /// Shared with every bullet view, so handing it out never allocates.
    pub sprite_key: Arc<str>,
    pub is_enemy_bullet: bool,
}

impl BulletParams {
    pub fn player() -> Self {
        Self {
            speed: PLAYER_BULLET_SPEED,
            damage_on_impact: BULLET_DAMAGE,
            sprite_key: Arc::from(PLAYER_BULLET_SPRITE),
            is_enemy_bullet: false,
        }
    }

    pub fn enemy() -> Self {
        Self {
            speed: ENEMY_BULLET_SPEED,
            damage_on_impact: BULLET_DAMAGE,
            sprite_key: Arc::from(ENEMY_BULLET_SPRITE),
            is_enemy_bullet: true,
        }
    }
}

/// Pursuit and engagement parameters for enemy airplanes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyAiParams {
    pub max_shooting_distance: f64,
    /// Misalignment (radians) under which the enemy stops turning.
    pub aim_deadband: f64,
    pub steering: SteeringMode,
}

impl Default for EnemyAiParams {
    fn default() -> Self {
        Self {
            max_shooting_distance: ENEMY_MAX_SHOOTING_DISTANCE,
            aim_deadband: ENEMY_AIM_DEADBAND,
            steering: SteeringMode::default(),
        }
    }
}

/// Camera targeting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Seconds of player motion to look ahead.
    pub time_ahead: f64,
    /// Leash length between player and camera.
    pub max_distance_from_player: f64,
    /// Lerp weight toward the new target, in (0, 1]. 1.0 = no smoothing.
    pub smoothing: f64,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            time_ahead: CAMERA_TIME_AHEAD,
            max_distance_from_player: CAMERA_MAX_DISTANCE_FROM_PLAYER,
            smoothing: CAMERA_SMOOTHING,
        }
    }
}

/// World-level constants that are not owned by a single entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    pub enemy_count: usize,
    pub enemy_spawn_radius: f64,
    pub muzzle_offset: f64,
    pub hit_radius: f64,
    pub bullet_lifespan_ms: f64,
    pub spark_lifespan_ms: f64,
    pub cloud_count: usize,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            enemy_count: ENEMY_COUNT,
            enemy_spawn_radius: ENEMY_SPAWN_RADIUS,
            muzzle_offset: MUZZLE_OFFSET,
            hit_radius: HIT_RADIUS,
            bullet_lifespan_ms: BULLET_LIFESPAN_MS,
            spark_lifespan_ms: SPARK_LIFESPAN_MS,
            cloud_count: CLOUD_COUNT,
        }
    }
}
