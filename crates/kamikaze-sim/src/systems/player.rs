//! Player airplane: steering and trigger from the held input intent.

use kamikaze_core::commands::InputIntent;

use crate::config::Tuning;
use crate::state::SimulationState;
use crate::systems::{fire_control, kinematics};

pub fn run(state: &mut SimulationState, tuning: &Tuning, intent: InputIntent, dt: f64) {
    kinematics::update_airplane(
        &mut state.player,
        &tuning.player,
        intent.rotation_sign(),
        dt,
        &mut state.arena,
    );

    if intent.fire {
        let now_ms = state.time.now_ms();
        fire_control::attempt_to_fire(
            &mut state.player,
            tuning,
            now_ms,
            &mut state.rng,
            &mut state.bullets,
            &mut state.sparks,
            &mut state.events,
        );
    }
}
