//! Cooldown-gated weapon fire.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use kamikaze_core::components::{Airplane, Bullet, Spark};
use kamikaze_core::events::SimEvent;
use kamikaze_core::types::Vector2D;

use crate::config::Tuning;
use crate::pool::EntityPool;

/// Fire the airplane's weapon unless it is cooling down.
///
/// The shot leaves the muzzle, `muzzle_offset` ahead along the jittered
/// direction, and a spark is left there. Shots requested during the cooldown
/// are dropped, not queued. Returns whether a bullet was spawned.
pub fn attempt_to_fire(
    airplane: &mut Airplane,
    tuning: &Tuning,
    now_ms: f64,
    rng: &mut ChaCha8Rng,
    bullets: &mut EntityPool<Bullet>,
    sparks: &mut EntityPool<Spark>,
    events: &mut Vec<SimEvent>,
) -> bool {
    let kind = airplane.weapon.kind;
    let weapon = tuning.weapon(kind);

    if let Some(last) = airplane.last_bullet_ms {
        if now_ms - last <= weapon.fire_cooldown_ms {
            return false;
        }
    }
    airplane.last_bullet_ms = Some(now_ms);

    let jitter = rng.gen::<f64>() * weapon.spread_angle - weapon.spread_angle / 2.0;
    let direction = airplane.rotation + jitter;

    let mut muzzle = Vector2D::from_angle(direction);
    muzzle
        .multiply_scalar(tuning.world.muzzle_offset)
        .add(&airplane.position);

    *bullets.acquire() = Bullet {
        kind,
        position: muzzle,
        direction,
        created_ms: now_ms,
    };
    *sparks.acquire() = Spark {
        position: muzzle,
        spawn_ms: now_ms,
    };
    events.push(SimEvent::ShotFired {
        shooter: kind,
        position: muzzle,
        direction,
    });
    log::trace!("{kind:?} fired at {now_ms:.0} ms");
    true
}
