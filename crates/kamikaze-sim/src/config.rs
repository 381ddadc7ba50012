//! Simulation configuration.
//!
//! Every tuning value has a default, so a TOML file only needs to name what it
//! overrides:
//!
//! ```toml
//! seed = 7
//!
//! [tuning.enemy_ai]
//! steering = "Ternary"
//!
//! [tuning.camera]
//! smoothing = 0.25
//! ```
//!
//! Per-side records (`player`, `enemy`, weapons, bullets) have no neutral
//! default and must be given in full when overridden.

use std::path::Path;

use serde::{Deserialize, Serialize};

use kamikaze_core::constants::{DT, MAX_ENEMIES};
use kamikaze_core::enums::AirplaneKind;
use kamikaze_core::params::*;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value parsed but is out of range
    #[error("Invalid {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Multiplier applied to `fixed_dt` by `tick()`.
    pub time_scale: f64,
    /// Seconds per tick.
    pub fixed_dt: f64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            fixed_dt: DT,
            tuning: Tuning::default(),
        }
    }
}

/// All gameplay parameters, one record per side where it applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: AirplaneParams,
    pub enemy: AirplaneParams,
    pub player_weapon: WeaponParams,
    pub enemy_weapon: WeaponParams,
    pub player_bullet: BulletParams,
    pub enemy_bullet: BulletParams,
    pub enemy_ai: EnemyAiParams,
    pub camera: CameraParams,
    pub world: WorldParams,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player: AirplaneParams::player(),
            enemy: AirplaneParams::enemy(),
            player_weapon: WeaponParams::player(),
            enemy_weapon: WeaponParams::enemy(),
            player_bullet: BulletParams::player(),
            enemy_bullet: BulletParams::enemy(),
            enemy_ai: EnemyAiParams::default(),
            camera: CameraParams::default(),
            world: WorldParams::default(),
        }
    }
}

impl Tuning {
    pub fn weapon(&self, kind: AirplaneKind) -> &WeaponParams {
        match kind {
            AirplaneKind::Player => &self.player_weapon,
            AirplaneKind::Enemy => &self.enemy_weapon,
        }
    }

    pub fn bullet(&self, kind: AirplaneKind) -> &BulletParams {
        match kind {
            AirplaneKind::Player => &self.player_bullet,
            AirplaneKind::Enemy => &self.enemy_bullet,
        }
    }
}

impl SimConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("time_scale", self.time_scale)?;
        positive("fixed_dt", self.fixed_dt)?;

        let t = &self.tuning;
        check_airplane("tuning.player", &t.player, AirplaneKind::Player)?;
        check_airplane("tuning.enemy", &t.enemy, AirplaneKind::Enemy)?;
        check_weapon("tuning.player_weapon", &t.player_weapon)?;
        check_weapon("tuning.enemy_weapon", &t.enemy_weapon)?;
        check_bullet("tuning.player_bullet", &t.player_bullet, AirplaneKind::Player)?;
        check_bullet("tuning.enemy_bullet", &t.enemy_bullet, AirplaneKind::Enemy)?;

        non_negative("tuning.enemy_ai.max_shooting_distance", t.enemy_ai.max_shooting_distance)?;
        non_negative("tuning.enemy_ai.aim_deadband", t.enemy_ai.aim_deadband)?;

        non_negative("tuning.camera.time_ahead", t.camera.time_ahead)?;
        non_negative(
            "tuning.camera.max_distance_from_player",
            t.camera.max_distance_from_player,
        )?;
        let smoothing = t.camera.smoothing;
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(invalid(
                "tuning.camera.smoothing",
                format!("must be in (0, 1], got {smoothing}"),
            ));
        }

        let w = &t.world;
        if w.enemy_count > MAX_ENEMIES {
            return Err(invalid(
                "tuning.world.enemy_count",
                format!("at most {MAX_ENEMIES} enemies, got {}", w.enemy_count),
            ));
        }
        non_negative("tuning.world.enemy_spawn_radius", w.enemy_spawn_radius)?;
        non_negative("tuning.world.muzzle_offset", w.muzzle_offset)?;
        non_negative("tuning.world.hit_radius", w.hit_radius)?;
        non_negative("tuning.world.bullet_lifespan_ms", w.bullet_lifespan_ms)?;
        non_negative("tuning.world.spark_lifespan_ms", w.spark_lifespan_ms)?;
        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason,
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(invalid(field, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    non_negative(field, value)?;
    if value == 0.0 {
        return Err(invalid(field, "must be greater than zero".to_string()));
    }
    Ok(())
}

/// Records are looked up by slot, so a side flag that names the other side
/// would be silently ignored.
fn check_side(field: String, flag: bool, slot: AirplaneKind) -> Result<(), ConfigError> {
    let expected = slot == AirplaneKind::Enemy;
    if flag != expected {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must be {expected} for the {slot:?} record"),
        });
    }
    Ok(())
}

fn check_airplane(prefix: &str, p: &AirplaneParams, slot: AirplaneKind) -> Result<(), ConfigError> {
    check_side(format!("{prefix}.is_enemy"), p.is_enemy, slot)?;
    let fields = [
        ("angular_acceleration", p.angular_acceleration),
        ("angular_deceleration", p.angular_deceleration),
        ("max_angular_speed", p.max_angular_speed),
        ("acceleration", p.acceleration),
        ("max_speed", p.max_speed),
        ("deceleration", p.deceleration),
    ];
    for (name, value) in fields {
        non_negative(&format!("{prefix}.{name}"), value)?;
    }
    positive(&format!("{prefix}.full_health"), p.full_health)
}

fn check_weapon(prefix: &str, p: &WeaponParams) -> Result<(), ConfigError> {
    non_negative(&format!("{prefix}.fire_cooldown_ms"), p.fire_cooldown_ms)?;
    non_negative(&format!("{prefix}.spread_angle"), p.spread_angle)
}

fn check_bullet(prefix: &str, p: &BulletParams, slot: AirplaneKind) -> Result<(), ConfigError> {
    check_side(format!("{prefix}.is_enemy_bullet"), p.is_enemy_bullet, slot)?;
    non_negative(&format!("{prefix}.speed"), p.speed)?;
    non_negative(&format!("{prefix}.damage_on_impact"), p.damage_on_impact)
}
