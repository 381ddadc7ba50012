//! Enemy airplane AI for kamikaze.
//!
//! Pure pursuit and engagement decisions: turn toward the player and
//! open fire once within range. No pool or engine dependency.

pub mod pursuit;

pub use kamikaze_core as core;

#[cfg(test)]
mod tests;
