//! Snapshot system: builds the renderer-facing view of the world.
//!
//! Read-only apart from draining the event buffer.

use std::sync::Arc;

use kamikaze_core::components::{Airplane, Bullet};
use kamikaze_core::enums::GamePhase;
use kamikaze_core::state::*;

use crate::config::Tuning;
use crate::state::SimulationState;

/// Build a `FrameSnapshot` and hand over the events collected since the
/// previous one.
pub fn build_snapshot(state: &mut SimulationState, tuning: &Tuning, phase: GamePhase) -> FrameSnapshot {
    FrameSnapshot {
        time: state.time,
        phase,
        player: airplane_view(&state.player),
        enemies: state.enemies.iter().map(airplane_view).collect(),
        bullets: state
            .bullets
            .iter()
            .map(|bullet| bullet_view(bullet, tuning))
            .collect(),
        sparks: state
            .sparks
            .iter()
            .map(|spark| SparkView {
                position: spark.position,
            })
            .collect(),
        camera: state.camera.position,
        events: std::mem::take(&mut state.events),
    }
}

fn airplane_view(airplane: &Airplane) -> AirplaneView {
    AirplaneView {
        kind: airplane.kind,
        position: airplane.position,
        rotation: airplane.rotation,
        health: airplane.health,
    }
}

fn bullet_view(bullet: &Bullet, tuning: &Tuning) -> BulletView {
    BulletView {
        position: bullet.position,
        rotation: bullet.direction,
        sprite_key: Arc::clone(&tuning.bullet(bullet.kind).sprite_key),
    }
}
