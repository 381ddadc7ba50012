//! Spark expiry.

use crate::pool::EntityPool;
use kamikaze_core::components::Spark;

/// Free every spark older than `lifespan_ms`.
pub fn run(sparks: &mut EntityPool<Spark>, now_ms: f64, lifespan_ms: f64) {
    sparks.start_iteration();
    while let Some(spark) = sparks.next_active() {
        if now_ms - spark.spawn_ms > lifespan_ms {
            sparks.free_current();
        }
    }
}
