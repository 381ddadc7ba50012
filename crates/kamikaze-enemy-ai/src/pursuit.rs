//! Pursuit steering and engagement gating.
//!
//! Pure functions that compute the rotation signal an enemy feeds into the
//! shared kinematic model, and whether it may attempt to fire. Operates on
//! plain data only.

use kamikaze_core::enums::SteeringMode;
use kamikaze_core::params::EnemyAiParams;
use kamikaze_core::types::Vector2D;

/// Input to the pursuit logic for a single enemy.
pub struct PursuitContext {
    pub position: Vector2D,
    /// Current facing in radians.
    pub rotation: f64,
    pub target: Vector2D,
}

/// Signed misalignment between the enemy's facing and the direction to its
/// target, in (-π, π]. Positive means the target is clockwise.
pub fn misalignment(ctx: &PursuitContext) -> f64 {
    let facing = Vector2D::from_angle(ctx.rotation);
    let mut toward_target = ctx.position;
    toward_target.direction_to(&ctx.target);
    facing.angle_to(&toward_target)
}

/// Rotation signal for the kinematic model.
///
/// Inside the aim deadband the enemy stops turning. Outside it, proportional
/// steering passes the misalignment through unchanged (so angular acceleration
/// scales with how far off target the enemy is), while ternary steering passes
/// only its sign.
pub fn steering_signal(ctx: &PursuitContext, params: &EnemyAiParams) -> f64 {
    let angle = misalignment(ctx);
    if angle.abs() < params.aim_deadband {
        return 0.0;
    }
    match params.steering {
        SteeringMode::Proportional => angle,
        SteeringMode::Ternary => angle.signum(),
    }
}

/// Whether the target is close enough to shoot at.
pub fn in_firing_range(position: &Vector2D, target: &Vector2D, params: &EnemyAiParams) -> bool {
    position.distance(target) < params.max_shooting_distance
}
