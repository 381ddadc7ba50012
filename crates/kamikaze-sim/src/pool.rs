//! Swap-remove entity pool.
//!
//! Backing storage is partitioned into `[0, active)` live items and
//! `[active, len)` recycled slots. Freeing swaps the item with the last live
//! one, so removal is O(1) and storage is never shrunk or reallocated.
//!
//! Iteration uses a single internal cursor so the caller can free the item it
//! is looking at without invalidating the walk:
//!
//! ```ignore
//! pool.start_iteration();
//! while let Some(bullet) = pool.next_active() {
//!     if expired(bullet) {
//!         pool.free_current();
//!         continue;
//!     }
//!     // ...
//! }
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Before the first item.
    Start,
    /// The item at this index was the last one returned.
    Visiting(usize),
    /// The item at this index was just freed; whatever was swapped into the
    /// slot has not been visited yet.
    Freed(usize),
    /// Past the live range.
    Done,
}

/// A growable pool of reusable `T` records.
#[derive(Debug, Clone)]
pub struct EntityPool<T> {
    items: Vec<T>,
    active: usize,
    cursor: Cursor,
}

impl<T> Default for EntityPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityPool<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            active: 0,
            cursor: Cursor::Done,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            active: 0,
            cursor: Cursor::Done,
        }
    }

    /// Number of live items.
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Live plus recycled slots.
    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Live item at `index`, if `index < active_count()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items[..self.active].get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items[..self.active].get_mut(index)
    }

    /// Live items in pool order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items[..self.active].iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items[..self.active].iter_mut()
    }

    /// Reset the cursor to before the first live item.
    pub fn start_iteration(&mut self) {
        self.cursor = Cursor::Start;
    }

    /// Advance the cursor and return the live item under it, or `None` once
    /// the live range is exhausted.
    ///
    /// After [`free_current`](Self::free_current) the cursor stays on the
    /// freed slot, which now holds the former last live item.
    pub fn next_active(&mut self) -> Option<&mut T> {
        let index = match self.cursor {
            Cursor::Start => 0,
            Cursor::Visiting(i) => i + 1,
            Cursor::Freed(i) => i,
            Cursor::Done => return None,
        };
        if index < self.active {
            self.cursor = Cursor::Visiting(index);
            Some(&mut self.items[index])
        } else {
            self.cursor = Cursor::Done;
            None
        }
    }

    /// Free the item most recently returned by [`next_active`](Self::next_active).
    ///
    /// Returns `false` (and does nothing) if there is no such item: before the
    /// first `next_active`, after the walk ended, or when the item was already
    /// freed.
    pub fn free_current(&mut self) -> bool {
        let Cursor::Visiting(index) = self.cursor else {
            return false;
        };
        if index >= self.active {
            return false;
        }
        let last = self.active - 1;
        self.items.swap(index, last);
        self.active = last;
        self.cursor = Cursor::Freed(index);
        true
    }

    /// Mark every item inactive. Storage is kept for reuse.
    pub fn free_all(&mut self) {
        self.active = 0;
        self.cursor = Cursor::Done;
    }
}

impl<T: Default> EntityPool<T> {
    /// Take a slot: the first recycled one if any, else a fresh `T::default()`.
    ///
    /// Recycled slots come back with whatever state they were freed with; the
    /// caller must overwrite every field. During an iteration the acquired
    /// item lands at the end of the live range and will be visited.
    pub fn acquire(&mut self) -> &mut T {
        if self.active == self.items.len() {
            self.items.push(T::default());
        }
        let index = self.active;
        self.active += 1;
        &mut self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_of(values: &[u32]) -> EntityPool<u32> {
        let mut pool = EntityPool::new();
        for &v in values {
            *pool.acquire() = v;
        }
        pool
    }

    fn drain_visits(pool: &mut EntityPool<u32>) -> Vec<u32> {
        let mut seen = Vec::new();
        pool.start_iteration();
        while let Some(v) = pool.next_active() {
            seen.push(*v);
        }
        seen
    }

    #[test]
    fn acquire_reuses_first_recycled_slot() {
        let mut pool = pool_of(&[1, 2, 3]);
        pool.start_iteration();
        pool.next_active();
        assert!(pool.free_current());
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.total_len(), 3);

        // The freed value was swapped to the end and is handed back untouched.
        let recycled = pool.acquire();
        assert_eq!(*recycled, 1);
        assert_eq!(pool.total_len(), 3);
        assert_eq!(pool.active_count(), 3);
    }

    #[test]
    fn freeing_during_walk_visits_swapped_item() {
        let mut pool = pool_of(&[10, 20, 30, 40]);
        let mut seen = Vec::new();
        pool.start_iteration();
        while let Some(v) = pool.next_active() {
            let value = *v;
            seen.push(value);
            if value == 20 {
                pool.free_current();
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![10, 20, 30, 40]);

        let mut remaining = drain_visits(&mut pool);
        remaining.sort_unstable();
        assert_eq!(remaining, vec![10, 30, 40]);
    }

    #[test]
    fn freeing_everything_in_one_walk() {
        let mut pool = pool_of(&[1, 2, 3, 4, 5]);
        let mut visits = 0;
        pool.start_iteration();
        while pool.next_active().is_some() {
            visits += 1;
            pool.free_current();
        }
        assert_eq!(visits, 5);
        assert!(pool.is_empty());
        assert_eq!(pool.total_len(), 5);
    }

    #[test]
    fn double_free_is_noop() {
        let mut pool = pool_of(&[1, 2, 3]);
        pool.start_iteration();
        pool.next_active();
        assert!(pool.free_current());
        assert!(!pool.free_current());
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn free_without_next_is_noop() {
        let mut pool = pool_of(&[1, 2]);
        assert!(!pool.free_current());
        pool.start_iteration();
        assert!(!pool.free_current());

        while pool.next_active().is_some() {}
        assert!(!pool.free_current(), "cursor past the live range");
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn freeing_last_item_ends_walk() {
        let mut pool = pool_of(&[1, 2, 3]);
        pool.start_iteration();
        pool.next_active();
        pool.next_active();
        pool.next_active();
        assert!(pool.free_current());
        assert!(pool.next_active().is_none());
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn acquired_mid_walk_is_visited() {
        let mut pool = pool_of(&[1, 2]);
        let mut seen = Vec::new();
        let mut spawned = false;
        pool.start_iteration();
        while let Some(v) = pool.next_active() {
            seen.push(*v);
            if !spawned {
                spawned = true;
                *pool.acquire() = 99;
            }
        }
        assert_eq!(seen, vec![1, 2, 99]);
    }

    #[test]
    fn free_all_keeps_storage() {
        let mut pool = pool_of(&[1, 2, 3]);
        pool.free_all();
        assert!(pool.is_empty());
        assert_eq!(pool.total_len(), 3);
        assert!(pool.get(0).is_none());
        assert!(drain_visits(&mut pool).is_empty());
    }

    #[test]
    fn accessors_cover_live_range_only() {
        let mut pool = pool_of(&[5, 6, 7]);
        pool.start_iteration();
        pool.next_active();
        pool.free_current();

        assert_eq!(pool.iter().count(), 2);
        assert!(pool.get(2).is_none());
        for v in pool.iter_mut() {
            *v += 1;
        }
        let mut values: Vec<u32> = pool.iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![7, 8]);
    }
}
