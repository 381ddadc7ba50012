//! Per-tick scratch vectors.
//!
//! Systems that need temporary vectors take them from the arena instead of
//! building them on the stack for every entity. The arena is reset once at the
//! end of each tick; handles from an earlier tick are stale.

use std::ops::{Index, IndexMut};

use kamikaze_core::constants::VECTOR_ARENA_INITIAL_SIZE;
use kamikaze_core::types::Vector2D;

/// Handle to a vector in a [`VectorArena`], valid until the next `reset()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scratch {
    index: usize,
    epoch: u64,
}

#[derive(Debug, Clone)]
pub struct VectorArena {
    slots: Vec<Vector2D>,
    active: usize,
    epoch: u64,
}

impl Default for VectorArena {
    fn default() -> Self {
        let mut arena = Self::new();
        arena.warm(VECTOR_ARENA_INITIAL_SIZE);
        arena
    }
}

impl VectorArena {
    /// An empty arena with no pre-allocated slots.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            active: 0,
            epoch: 0,
        }
    }

    /// Make sure at least `count` slots exist.
    pub fn warm(&mut self, count: usize) {
        if self.slots.len() < count {
            self.slots.resize(count, Vector2D::ZERO);
        }
    }

    pub fn alloc(&mut self, x: f64, y: f64) -> Scratch {
        if self.active == self.slots.len() {
            self.slots.push(Vector2D::ZERO);
        }
        let index = self.active;
        self.active += 1;
        self.slots[index].set(x, y);
        Scratch {
            index,
            epoch: self.epoch,
        }
    }

    pub fn copy_of(&mut self, v: &Vector2D) -> Scratch {
        self.alloc(v.x, v.y)
    }

    /// Unit vector pointing at `angle`.
    pub fn from_angle(&mut self, angle: f64) -> Scratch {
        self.alloc(angle.cos(), angle.sin())
    }

    /// `None` if the handle predates the last reset.
    pub fn get(&self, handle: Scratch) -> Option<&Vector2D> {
        if handle.epoch == self.epoch && handle.index < self.active {
            Some(&self.slots[handle.index])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, handle: Scratch) -> Option<&mut Vector2D> {
        if handle.epoch == self.epoch && handle.index < self.active {
            Some(&mut self.slots[handle.index])
        } else {
            None
        }
    }

    /// Invalidate every handle. Slots are kept for the next tick.
    pub fn reset(&mut self) {
        self.active = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Vectors handed out since the last reset.
    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl Index<Scratch> for VectorArena {
    type Output = Vector2D;

    fn index(&self, handle: Scratch) -> &Vector2D {
        assert_eq!(handle.epoch, self.epoch, "stale scratch vector");
        &self.slots[handle.index]
    }
}

impl IndexMut<Scratch> for VectorArena {
    fn index_mut(&mut self, handle: Scratch) -> &mut Vector2D {
        assert_eq!(handle.epoch, self.epoch, "stale scratch vector");
        &mut self.slots[handle.index]
    }
}
