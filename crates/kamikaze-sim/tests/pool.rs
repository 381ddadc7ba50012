//! Free-while-iterating scenarios for the entity pool.

use kamikaze_sim::pool::EntityPool;

#[test]
fn freeing_kth_item_leaves_each_other_item_once() {
    for n in 1..=8u32 {
        for k in 0..n as usize {
            let mut pool = EntityPool::new();
            for value in 0..n {
                *pool.acquire() = value;
            }

            let mut visited = Vec::new();
            let mut removed = None;
            pool.start_iteration();
            while let Some(item) = pool.next_active() {
                let value = *item;
                if visited.len() == k {
                    removed = Some(value);
                    pool.free_current();
                }
                visited.push(value);
            }
            visited.sort_unstable();
            let all: Vec<u32> = (0..n).collect();
            assert_eq!(visited, all, "n={n} k={k}: every item visited once");
            assert_eq!(pool.active_count(), n as usize - 1);

            let mut remaining = Vec::new();
            pool.start_iteration();
            while let Some(item) = pool.next_active() {
                remaining.push(*item);
            }
            remaining.sort_unstable();
            let expected: Vec<u32> = (0..n).filter(|v| Some(*v) != removed).collect();
            assert_eq!(remaining, expected, "n={n} k={k}");
        }
    }
}

#[test]
fn freeing_every_even_item_visits_all_once() {
    let mut pool = EntityPool::new();
    for value in 0..6u32 {
        *pool.acquire() = value;
    }

    let mut visited = Vec::new();
    pool.start_iteration();
    while let Some(item) = pool.next_active() {
        let value = *item;
        visited.push(value);
        if value % 2 == 0 {
            pool.free_current();
        }
    }
    visited.sort_unstable();
    assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);

    let mut remaining: Vec<u32> = pool.iter().copied().collect();
    remaining.sort_unstable();
    assert_eq!(remaining, vec![1, 3, 5]);
}

#[test]
fn storage_is_reused_across_waves() {
    let mut pool: EntityPool<u64> = EntityPool::new();
    for wave in 0..20u64 {
        for i in 0..16 {
            *pool.acquire() = wave * 100 + i;
        }
        pool.start_iteration();
        while pool.next_active().is_some() {
            pool.free_current();
        }
        assert!(pool.is_empty());
    }
    assert_eq!(pool.total_len(), 16);
}
