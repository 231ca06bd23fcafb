//! Testbed for merging two individually sorted slices into a caller-owned output buffer,
//! comparing a classic sequential two-pointer merge against a fork-join recursive merge.
//!
//! Inputs are read-only and must each be sorted under the supplied comparator. The output
//! buffer must hold at least `left.len() + right.len()` elements; exactly that many leading
//! positions are written, each exactly once. Elements are cloned from the inputs, the inputs
//! themselves are never mutated.

macro_rules! merge_impl {
    ($name:expr) => {
        pub struct MergeImpl;

        impl crate::Merge for MergeImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn merge<T>(left: &[T], right: &[T], dst: &mut [T], cutoff: usize) -> usize
            where
                T: Ord + Clone + Send + Sync,
            {
                merge(left, right, dst, cutoff)
            }

            #[inline]
            fn merge_by<T, F>(
                left: &[T],
                right: &[T],
                dst: &mut [T],
                compare: F,
                cutoff: usize,
            ) -> usize
            where
                T: Clone + Send + Sync,
                F: Fn(&T, &T) -> std::cmp::Ordering + Sync,
            {
                merge_by(left, right, dst, compare, cutoff)
            }
        }
    };
}

/// Common interface of the merge implementations, so tests and benchmarks can be written once
/// and run against each of them.
///
/// `cutoff` is the combined operand size below which a recursive implementation stops forking
/// and merges sequentially. It is purely a performance knob, the output is identical for every
/// value. Implementations without recursion accept and ignore it.
pub trait Merge {
    fn name() -> String;

    /// Merge `left` and `right` into the front of `dst` using the natural order of `T`.
    /// Returns one past the last written index, i.e. `left.len() + right.len()`.
    fn merge<T>(left: &[T], right: &[T], dst: &mut [T], cutoff: usize) -> usize
    where
        T: Ord + Clone + Send + Sync;

    /// Like [`Merge::merge`] with a caller-supplied total order. The comparator must be a
    /// strict weak ordering and is shared by concurrently running subtasks, hence `Fn + Sync`.
    fn merge_by<T, F>(left: &[T], right: &[T], dst: &mut [T], compare: F, cutoff: usize) -> usize
    where
        T: Clone + Send + Sync,
        F: Fn(&T, &T) -> std::cmp::Ordering + Sync;
}

pub mod parallel;
pub mod patterns;
pub mod rank;
pub mod sequential;
pub mod stats;
pub mod task;

pub use parallel::{merge, merge_by};
