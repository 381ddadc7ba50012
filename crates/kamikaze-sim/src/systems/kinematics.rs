//! Airplane motion integrator, shared by the player and the enemies.
//!
//! Angular speed is in revolutions per second. Linear drag acts per axis on
//! the velocity from the previous tick, before this tick's thrust is added.

use kamikaze_core::components::Airplane;
use kamikaze_core::constants::TAU;
use kamikaze_core::params::AirplaneParams;

use crate::arena::VectorArena;

/// Integrate one tick of rotation and translation.
///
/// `rotation_sign` is -1, 0 or +1 for the player; enemies with proportional
/// steering pass a signed magnitude, which scales angular acceleration.
pub fn update_airplane(
    airplane: &mut Airplane,
    params: &AirplaneParams,
    rotation_sign: f64,
    dt: f64,
    arena: &mut VectorArena,
) {
    // Rotation
    if rotation_sign != 0.0 {
        airplane.angular_speed += rotation_sign * params.angular_acceleration * dt;
    } else {
        airplane.angular_speed = decay_toward_zero(airplane.angular_speed, params.angular_deceleration * dt);
    }
    if airplane.angular_speed.abs() > params.max_angular_speed {
        airplane.angular_speed = airplane.angular_speed.signum() * params.max_angular_speed;
    }
    airplane.rotation += airplane.angular_speed * dt * TAU;

    // Drag
    let drag = params.deceleration * dt;
    airplane.velocity.x = decay_toward_zero(airplane.velocity.x, drag);
    airplane.velocity.y = decay_toward_zero(airplane.velocity.y, drag);

    // Thrust
    let thrust = arena.from_angle(airplane.rotation);
    arena[thrust].multiply_scalar(params.acceleration * dt);
    airplane.velocity.add(&arena[thrust]);
    airplane.velocity.clamp(params.max_speed);

    // Position
    let step = arena.copy_of(&airplane.velocity);
    arena[step].multiply_scalar(dt);
    airplane.position.add(&arena[step]);
}

/// Move `value` toward zero by `amount`, snapping to exactly zero instead of
/// crossing it.
fn decay_toward_zero(value: f64, amount: f64) -> f64 {
    if value.abs() <= amount {
        0.0
    } else {
        value - value.signum() * amount
    }
}
