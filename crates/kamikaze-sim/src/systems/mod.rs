//! Per-tick systems over the simulation state.
//!
//! Systems are free functions. They do not own state; everything they touch
//! lives in `SimulationState` or is passed in.

pub mod bullets;
pub mod camera;
pub mod damage;
pub mod enemy_ai;
pub mod fire_control;
pub mod kinematics;
pub mod player;
pub mod snapshot;
pub mod sparks;
