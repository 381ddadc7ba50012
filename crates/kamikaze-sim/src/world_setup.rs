//! Spawn factories for the player, the enemy wave and the cloud field.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use kamikaze_core::components::{Airplane, Camera, Weapon};
use kamikaze_core::constants::{CLOUD_VARIANTS, TAU, UP};
use kamikaze_core::enums::{AirplaneKind, LifeState};
use kamikaze_core::params::AirplaneParams;
use kamikaze_core::state::CloudView;
use kamikaze_core::types::Vector2D;

use crate::config::Tuning;
use crate::pool::EntityPool;
use crate::state::SimulationState;

/// Reset the world to the start of a sortie: fresh player, full enemy wave,
/// no bullets or sparks, camera on the player, clock at zero.
///
/// The RNG is left alone so it keeps its seeded sequence.
pub fn setup_mission(state: &mut SimulationState, tuning: &Tuning) {
    state.time = Default::default();
    state.player = spawn_player(&tuning.player);
    state.enemies.free_all();
    state.bullets.free_all();
    state.sparks.free_all();
    state.events.clear();
    state.arena.reset();
    state.camera = Camera {
        position: state.player.position,
    };
    spawn_enemies(
        &mut state.enemies,
        &mut state.rng,
        &tuning.enemy,
        tuning.world.enemy_count,
        tuning.world.enemy_spawn_radius,
    );
}

/// The player starts at the origin, facing up, already at full speed.
pub fn spawn_player(params: &AirplaneParams) -> Airplane {
    let mut velocity = Vector2D::from_angle(UP);
    velocity.multiply_scalar(params.max_speed);
    Airplane {
        kind: AirplaneKind::Player,
        position: Vector2D::ZERO,
        velocity,
        rotation: UP,
        angular_speed: 0.0,
        health: params.full_health,
        life: LifeState::Alive,
        last_bullet_ms: None,
        weapon: Weapon {
            kind: AirplaneKind::Player,
        },
    }
}

/// Place `count` enemies on a ring of `radius` around the origin at random
/// bearings, each facing a random direction and at rest.
pub fn spawn_enemies(
    enemies: &mut EntityPool<Airplane>,
    rng: &mut ChaCha8Rng,
    params: &AirplaneParams,
    count: usize,
    radius: f64,
) {
    for _ in 0..count {
        let bearing = rng.gen::<f64>() * TAU;
        let mut position = Vector2D::from_angle(bearing);
        position.multiply_scalar(radius);
        let rotation = rng.gen::<f64>() * TAU;

        *enemies.acquire() = Airplane {
            kind: AirplaneKind::Enemy,
            position,
            velocity: Vector2D::ZERO,
            rotation,
            angular_speed: 0.0,
            health: params.full_health,
            life: LifeState::Alive,
            last_bullet_ms: None,
            weapon: Weapon {
                kind: AirplaneKind::Enemy,
            },
        };
    }
}

/// Scatter the static background: `count` clouds uniformly over a rectangle of
/// size `extent` centred on the origin.
pub fn scatter_clouds(rng: &mut ChaCha8Rng, count: usize, extent: Vector2D) -> Vec<CloudView> {
    (0..count)
        .map(|_| {
            let x = (rng.gen::<f64>() - 0.5) * extent.x;
            let y = (rng.gen::<f64>() - 0.5) * extent.y;
            CloudView {
                position: Vector2D::new(x, y),
                variant: rng.gen_range(0..CLOUD_VARIANTS),
            }
        })
        .collect()
}
