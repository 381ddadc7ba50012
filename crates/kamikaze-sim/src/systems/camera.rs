//! Camera targeting.
//!
//! The camera aims halfway between where the player will be shortly and the
//! centre of the enemy swarm, but never strays further than
//! `max_distance_from_player` from the player.

use kamikaze_core::components::{Airplane, Camera};
use kamikaze_core::params::CameraParams;

use crate::arena::VectorArena;
use crate::pool::EntityPool;
use crate::state::SimulationState;

pub fn run(state: &mut SimulationState, params: &CameraParams) {
    update_camera(
        &mut state.camera,
        &state.player,
        &state.enemies,
        params,
        &mut state.arena,
    );
}

pub fn update_camera(
    camera: &mut Camera,
    player: &Airplane,
    enemies: &EntityPool<Airplane>,
    params: &CameraParams,
    arena: &mut VectorArena,
) {
    let target = arena.copy_of(&player.velocity);
    arena[target]
        .multiply_scalar(params.time_ahead)
        .add(&player.position);

    let enemy_count = enemies.active_count();
    if enemy_count > 0 {
        let centroid = arena.alloc(0.0, 0.0);
        for enemy in enemies.iter() {
            arena[centroid].add(&enemy.position);
        }
        arena[centroid].divide_scalar(enemy_count as f64);
        let centroid = arena[centroid];
        arena[target].add(&centroid).multiply_scalar(0.5);
    }

    let leash = params.max_distance_from_player;
    let goal = arena[target];
    let leashed = arena.copy_of(&player.position);
    arena[leashed].move_toward(&goal, leash);

    if params.smoothing >= 1.0 {
        camera.position = arena[leashed];
        return;
    }

    let mut smoothed = camera.position;
    smoothed.lerp(&arena[leashed], params.smoothing);
    // A lagging camera may have fallen outside the leash; pull it back.
    camera.position = player.position;
    camera.position.move_toward(&smoothed, leash);
}
