//! Scripted pilot for the headless demo.
//!
//! Holds the trigger the whole time and weaves: a clockwise turn, a straight
//! leg, a counterclockwise turn, another straight leg, repeated.

use kamikaze_core::commands::InputIntent;

/// Ticks spent in each leg of the weave, in order: clockwise, straight,
/// counterclockwise, straight.
const LEGS: [(u64, Turn); 4] = [
    (90, Turn::Clockwise),
    (60, Turn::Straight),
    (90, Turn::Counterclockwise),
    (60, Turn::Straight),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Clockwise,
    Straight,
    Counterclockwise,
}

/// Intent to hold during `tick`.
pub fn scripted_intent(tick: u64) -> InputIntent {
    let period: u64 = LEGS.iter().map(|(ticks, _)| ticks).sum();
    let mut offset = tick % period;
    let mut turn = Turn::Straight;
    for (ticks, leg) in LEGS {
        if offset < ticks {
            turn = leg;
            break;
        }
        offset -= ticks;
    }
    InputIntent {
        turn_clockwise: turn == Turn::Clockwise,
        turn_counterclockwise: turn == Turn::Counterclockwise,
        fire: true,
    }
}
