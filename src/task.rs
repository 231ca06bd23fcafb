//! Fork-join layer the recursive merge runs on. A thin wrapper over rayon so the merge itself
//! stays agnostic of the scheduler, and so a missing thread pool degrades to inline execution
//! instead of failing the whole merge.

use once_cell::sync::Lazy;

// Built once per process. `None` on restricted targets where worker threads cannot be spawned.
static POOL: Lazy<Option<rayon::ThreadPool>> =
    Lazy::new(|| rayon::ThreadPoolBuilder::new().build().ok());

/// Runs both closures, potentially in parallel on the work-stealing pool, and returns once both
/// have completed. Without a pool both run inline on the calling thread, in order.
///
/// A panic in either closure resumes on the caller after both finished or unwound.
pub fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    match POOL.as_ref() {
        Some(pool) => pool.join(a, b),
        None => (a(), b()),
    }
}

/// Number of worker threads fork-join work is distributed over, 1 when running inline.
pub fn num_threads() -> usize {
    POOL.as_ref().map_or(1, |pool| pool.current_num_threads())
}
