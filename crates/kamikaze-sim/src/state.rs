//! Mutable world state threaded through every system each tick.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use kamikaze_core::components::{Airplane, Bullet, Camera, Spark};
use kamikaze_core::constants::MAX_ENEMIES;
use kamikaze_core::events::SimEvent;
use kamikaze_core::types::SimTime;

use crate::arena::VectorArena;
use crate::pool::EntityPool;

/// Everything a tick reads or writes, owned by the engine.
///
/// Fields are public so systems can borrow disjoint parts at once (iterate
/// bullets while damaging enemies, for instance).
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub time: SimTime,
    pub player: Airplane,
    pub enemies: EntityPool<Airplane>,
    pub bullets: EntityPool<Bullet>,
    pub sparks: EntityPool<Spark>,
    pub camera: Camera,
    /// Scratch vectors, reset at the end of every tick.
    pub arena: VectorArena,
    /// Single source of randomness.
    pub rng: ChaCha8Rng,
    /// Events produced since the last snapshot.
    pub events: Vec<SimEvent>,
}

impl SimulationState {
    /// An empty world: no enemies, a default player, time zero.
    pub fn new(seed: u64) -> Self {
        Self {
            time: SimTime::default(),
            player: Airplane::default(),
            enemies: EntityPool::with_capacity(MAX_ENEMIES),
            bullets: EntityPool::new(),
            sparks: EntityPool::new(),
            camera: Camera::default(),
            arena: VectorArena::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            events: Vec::new(),
        }
    }
}
