//! Frame snapshot: the complete visible state handed to the renderer each tick.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::enums::{AirplaneKind, GamePhase};
use crate::events::SimEvent;
use crate::types::{SimTime, Vector2D};

/// Complete frame state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: AirplaneView,
    /// Active enemies, in pool order.
    pub enemies: Vec<AirplaneView>,
    pub bullets: Vec<BulletView>,
    pub sparks: Vec<SparkView>,
    /// Where the view should be centred.
    pub camera: Vector2D,
    pub events: Vec<SimEvent>,
}

/// An airplane on screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirplaneView {
    pub kind: AirplaneKind,
    pub position: Vector2D,
    pub rotation: f64,
    pub health: f64,
}

/// A bullet on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vector2D,
    pub rotation: f64,
    pub sprite_key: Arc<str>,
}

/// A spark on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkView {
    pub position: Vector2D,
}

/// One cloud of the static background field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CloudView {
    pub position: Vector2D,
    /// Which of the cloud sprites to draw.
    pub variant: u8,
}
