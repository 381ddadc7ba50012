//! Headless driver for the kamikaze simulation.
//!
//! Runs the engine on its own thread at a fixed rate, feeding it commands
//! from a channel and handing back a snapshot per tick.

pub mod game_loop;
pub mod sortie;
pub mod state;

pub use kamikaze_core as core;
