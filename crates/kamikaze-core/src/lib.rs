//! Core types and definitions for the kamikaze airplane shooter.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the 2D vector type, airplane/weapon/bullet parameters, commands,
//! frame snapshots, events, and tuning constants.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod params;
pub mod state;
pub mod types;
pub mod vector;

pub use vector::Vector2D;
