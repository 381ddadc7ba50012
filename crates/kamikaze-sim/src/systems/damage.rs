//! Health and the alive/dead transition.

use kamikaze_core::components::Airplane;
use kamikaze_core::enums::LifeState;

/// Subtract `amount` from the airplane's health, flooring at zero.
///
/// Returns `true` only on the tick health first reaches zero; a dead
/// airplane takes no further damage.
pub fn receive_damage(airplane: &mut Airplane, amount: f64) -> bool {
    if airplane.life == LifeState::Dead {
        return false;
    }
    airplane.health = (airplane.health - amount).max(0.0);
    if airplane.health == 0.0 {
        airplane.life = LifeState::Dead;
        true
    } else {
        false
    }
}
