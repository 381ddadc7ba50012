//! Enemy airplanes: pursue the player and fire when close.
//!
//! Decisions come from kamikaze-enemy-ai; this system applies them through
//! the shared kinematic model and fire control.

use kamikaze_enemy_ai::pursuit::{in_firing_range, steering_signal, PursuitContext};

use crate::config::Tuning;
use crate::state::SimulationState;
use crate::systems::{fire_control, kinematics};

pub fn run(state: &mut SimulationState, tuning: &Tuning, dt: f64) {
    let now_ms = state.time.now_ms();
    let SimulationState {
        player,
        enemies,
        bullets,
        sparks,
        arena,
        rng,
        events,
        ..
    } = state;
    let target = player.position;

    for enemy in enemies.iter_mut() {
        let ctx = PursuitContext {
            position: enemy.position,
            rotation: enemy.rotation,
            target,
        };
        let signal = steering_signal(&ctx, &tuning.enemy_ai);
        kinematics::update_airplane(enemy, &tuning.enemy, signal, dt, arena);

        // Range is measured after this tick's move.
        if in_firing_range(&enemy.position, &target, &tuning.enemy_ai) {
            fire_control::attempt_to_fire(enemy, tuning, now_ms, rng, bullets, sparks, events);
        }
    }
}
