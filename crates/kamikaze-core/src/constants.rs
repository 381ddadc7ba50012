//! Simulation constants and tuning defaults.

use std::f64::consts::PI;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Angles ---

/// Full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Angle pointing right (+x).
pub const RIGHT: f64 = 0.0;

/// Angle pointing down (+y, screen space).
pub const DOWN: f64 = PI / 2.0;

/// Angle pointing left (-x).
pub const LEFT: f64 = PI;

/// Angle pointing up (-y, screen space).
pub const UP: f64 = -PI / 2.0;

/// Tolerance for approximate float comparisons.
pub const EPSILON: f64 = 0.00001;

// --- Player airplane ---

pub const PLAYER_ANGULAR_ACCELERATION: f64 = 2.0;
pub const PLAYER_ANGULAR_DECELERATION: f64 = 5.0;
/// Revolutions per second.
pub const PLAYER_MAX_ANGULAR_SPEED: f64 = 0.8;
pub const PLAYER_ACCELERATION: f64 = 800.0;
pub const PLAYER_MAX_SPEED: f64 = 300.0;
pub const PLAYER_DECELERATION: f64 = 250.0;
pub const PLAYER_FULL_HEALTH: f64 = 100.0;

// --- Enemy airplanes ---

pub const ENEMY_ANGULAR_ACCELERATION: f64 = 100.0;
pub const ENEMY_ANGULAR_DECELERATION: f64 = 100.0;
/// Revolutions per second.
pub const ENEMY_MAX_ANGULAR_SPEED: f64 = 0.4;
pub const ENEMY_ACCELERATION: f64 = 500.0;
pub const ENEMY_MAX_SPEED: f64 = 400.0;
pub const ENEMY_DECELERATION: f64 = 250.0;
pub const ENEMY_FULL_HEALTH: f64 = 100.0;

/// Number of enemies spawned at mission start.
pub const ENEMY_COUNT: usize = 10;

/// Upper bound on the enemy pool.
pub const MAX_ENEMIES: usize = 10;

/// Radius of the ring enemies spawn on, around the origin.
pub const ENEMY_SPAWN_RADIUS: f64 = 600.0;

/// Enemies fire only when the player is closer than this.
pub const ENEMY_MAX_SHOOTING_DISTANCE: f64 = 300.0;

/// Misalignment below which an enemy stops turning (radians).
pub const ENEMY_AIM_DEADBAND: f64 = PI / 20.0;

// --- Weapons ---

pub const PLAYER_FIRE_COOLDOWN_MS: f64 = 150.0;
pub const PLAYER_SPREAD_ANGLE: f64 = PI / 20.0;
pub const ENEMY_FIRE_COOLDOWN_MS: f64 = 4000.0;
pub const ENEMY_SPREAD_ANGLE: f64 = PI / 10.0;

/// Distance ahead of the airplane at which bullets appear.
pub const MUZZLE_OFFSET: f64 = 30.0;

// --- Bullets ---

pub const PLAYER_BULLET_SPEED: f64 = 700.0;
pub const ENEMY_BULLET_SPEED: f64 = 450.0;
pub const BULLET_DAMAGE: f64 = 50.0;
pub const PLAYER_BULLET_SPRITE: &str = "round-fire-no-border";
pub const ENEMY_BULLET_SPRITE: &str = "round-fire-with-border";

/// Bullets older than this are removed.
pub const BULLET_LIFESPAN_MS: f64 = 4000.0;

/// A bullet closer than this to an airplane's center hits it.
pub const HIT_RADIUS: f64 = 10.0;

// --- Sparks ---

pub const SPARK_LIFESPAN_MS: f64 = 80.0;

// --- Camera ---

/// How far ahead (seconds) the player is projected when picking the camera target.
pub const CAMERA_TIME_AHEAD: f64 = 1.0 / 7.0;

/// Maximum distance of the camera from the player.
pub const CAMERA_MAX_DISTANCE_FROM_PLAYER: f64 = 80.0;

/// Weight of the new target when smoothing camera motion; 1.0 disables smoothing.
pub const CAMERA_SMOOTHING: f64 = 1.0;

// --- Background ---

/// Pixel resolution the background field is scaled from.
pub const RESOLUTION_WIDTH: f64 = 640.0;
pub const RESOLUTION_HEIGHT: f64 = 360.0;

/// The cloud field spans this many screens in each direction.
pub const CLOUD_FIELD_SCALE: f64 = 80.0;

pub const CLOUD_COUNT: usize = 20_000;

/// Number of distinct cloud sprites.
pub const CLOUD_VARIANTS: u8 = 6;

// --- Scratch vectors ---

/// Vectors pre-allocated in the per-tick arena.
pub const VECTOR_ARENA_INITIAL_SIZE: usize = 16;
