use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

/// Provides a set of pre-sorted operand patterns useful for testing and benchmarking merge
/// implementations. Currently limited to i32 values.

// --- Public ---

pub fn random_sorted(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::  then sorted ascending

    let mut vals = random_vec(size);
    vals.sort_unstable();
    vals
}

pub fn random_uniform_sorted<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::  narrow value range, many duplicates, sorted ascending
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    let mut vals: Vec<i32> = (0..size).map(|_| dist.sample(&mut rng)).collect();
    vals.sort_unstable();
    vals
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn ascending_from(size: usize, start: i32) -> Vec<i32> {
    // Same shape as `ascending`, offset by `start`. The speedup driver workload.

    (0..size as i32).map(|i| i + start).collect::<Vec<_>>()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

/// Splits `size` elements into an operand pair with a random length ratio, both sorted.
pub fn random_pair(size: usize) -> (Vec<i32>, Vec<i32>) {
    let left_len = if size == 0 {
        0
    } else {
        random_uniform_sorted(1, 0..=(size as i32))[0] as usize
    };

    (random_sorted(left_len), random_sorted(size - left_len))
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
