//! Classic two-pointer linear merge. Doubles as the baseline implementation in tests and
//! benchmarks and as the fallback the recursive merge bottoms out in.

use std::cmp::Ordering;

merge_impl!("rust_two_pointer_sequential");

#[inline]
pub fn merge<T>(left: &[T], right: &[T], dst: &mut [T], cutoff: usize) -> usize
where
    T: Ord + Clone,
{
    merge_by(left, right, dst, |a, b| a.cmp(b), cutoff)
}

/// Merges `left` and `right` into the front of `dst` in O(left.len() + right.len()).
/// `cutoff` is accepted for signature parity with the recursive implementation and ignored.
///
/// Panics if `dst` is shorter than `left.len() + right.len()`.
pub fn merge_by<T, F>(left: &[T], right: &[T], dst: &mut [T], mut compare: F, cutoff: usize) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let _ = cutoff;

    let total = left.len() + right.len();
    merge_into(left, right, &mut dst[..total], &mut |a, b| {
        compare(a, b) == Ordering::Less
    });

    total
}

/// Two-pointer merge into `dst`, which must hold exactly `left.len() + right.len()` elements.
pub(crate) fn merge_into<T, F>(left: &[T], right: &[T], dst: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(dst.len(), left.len() + right.len());

    let mut l = 0;
    let mut r = 0;

    for slot in dst.iter_mut() {
        // Consume the lesser side. If equal, prefer the left operand to maintain stability.
        let take_right = l == left.len() || (r < right.len() && is_less(&right[r], &left[l]));

        if take_right {
            *slot = right[r].clone();
            r += 1;
        } else {
            *slot = left[l].clone();
            l += 1;
        }
    }
}
