//! Bullet flight, expiry and hits.
//!
//! A bullet only hits the opposing side. Player bullets test every live enemy
//! in pool order and stop at the first hit; enemy bullets test the player.
//! A bullet is freed the moment it hits, so it can never damage two targets.

use kamikaze_core::components::{Airplane, Bullet, Spark};
use kamikaze_core::enums::{AirplaneKind, LifeState};
use kamikaze_core::events::SimEvent;
use kamikaze_core::types::Vector2D;

use crate::arena::VectorArena;
use crate::config::Tuning;
use crate::pool::EntityPool;
use crate::state::SimulationState;
use crate::systems::damage::receive_damage;

pub fn run(state: &mut SimulationState, tuning: &Tuning, dt: f64) {
    let now_ms = state.time.now_ms();
    let SimulationState {
        player,
        enemies,
        bullets,
        sparks,
        arena,
        events,
        ..
    } = state;
    let world = &tuning.world;

    bullets.start_iteration();
    while let Some(bullet) = bullets.next_active() {
        let params = tuning.bullet(bullet.kind);
        advance(bullet, params.speed, dt, arena);

        // Expired bullets are not tested for hits on their last tick.
        if now_ms - bullet.created_ms > world.bullet_lifespan_ms {
            bullets.free_current();
            continue;
        }

        let position = bullet.position;
        let damage = params.damage_on_impact;
        let hit = match bullet.kind {
            AirplaneKind::Player => {
                strike_first_enemy(enemies, &position, damage, world.hit_radius, events)
            }
            AirplaneKind::Enemy => strike_player(player, &position, damage, world.hit_radius, events),
        };

        if hit {
            *sparks.acquire() = Spark {
                position,
                spawn_ms: now_ms,
            };
            bullets.free_current();
        }
    }
}

/// Move the bullet along its heading.
pub fn advance(bullet: &mut Bullet, speed: f64, dt: f64, arena: &mut VectorArena) {
    let step = arena.from_angle(bullet.direction);
    arena[step].multiply_scalar(speed * dt);
    bullet.position.add(&arena[step]);
}

/// Circle test with the combined radius folded into `hit_radius`.
pub fn is_hit(airplane: &Airplane, position: &Vector2D, hit_radius: f64) -> bool {
    airplane.position.distance(position) < hit_radius
}

/// Damage the first live enemy within range. An enemy killed by the hit is
/// freed from the pool.
fn strike_first_enemy(
    enemies: &mut EntityPool<Airplane>,
    position: &Vector2D,
    damage: f64,
    hit_radius: f64,
    events: &mut Vec<SimEvent>,
) -> bool {
    enemies.start_iteration();
    while let Some(enemy) = enemies.next_active() {
        if !is_hit(enemy, position, hit_radius) {
            continue;
        }
        let died = receive_damage(enemy, damage);
        events.push(SimEvent::AirplaneHit {
            target: AirplaneKind::Enemy,
            damage,
            remaining_health: enemy.health,
        });
        if died {
            let wreck = enemy.position;
            enemies.free_current();
            events.push(SimEvent::EnemyDestroyed { position: wreck });
            log::debug!("Enemy destroyed at ({:.0}, {:.0})", wreck.x, wreck.y);
        }
        return true;
    }
    false
}

fn strike_player(
    player: &mut Airplane,
    position: &Vector2D,
    damage: f64,
    hit_radius: f64,
    events: &mut Vec<SimEvent>,
) -> bool {
    if player.life == LifeState::Dead || !is_hit(player, position, hit_radius) {
        return false;
    }
    let died = receive_damage(player, damage);
    events.push(SimEvent::AirplaneHit {
        target: AirplaneKind::Player,
        damage,
        remaining_health: player.health,
    });
    if died {
        events.push(SimEvent::PlayerDestroyed);
    }
    true
}
