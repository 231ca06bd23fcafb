//! Fork-join recursive merge after Cormen et al., "Introduction to Algorithms", 3rd ed.,
//! pp. 798-802. The larger operand is split at its midpoint, the matching split of the smaller
//! operand is found by binary search, the element between the halves lands at a position that
//! is known up front, and the two half-merges recurse as independent tasks. Below `cutoff`
//! combined elements the recursion stops and the two-pointer merge runs instead.

use std::cmp::Ordering;

use crate::rank;
use crate::sequential;
use crate::task;

merge_impl!("rust_rayon_recursive_parallel");

#[inline]
pub fn merge<T>(left: &[T], right: &[T], dst: &mut [T], cutoff: usize) -> usize
where
    T: Ord + Clone + Send + Sync,
{
    merge_by(left, right, dst, |a, b| a.cmp(b), cutoff)
}

/// Merges the sorted slices `left` and `right` into the front of `dst` and returns one past
/// the last written index, i.e. `left.len() + right.len()`.
///
/// Each input must already be sorted under `compare`, which must be a strict weak ordering.
/// That contract is the caller's and is not validated here. The output is identical for every
/// `cutoff`; `0` is legal and recurses all the way down to two-element leaves.
///
/// Panics if `dst` is shorter than `left.len() + right.len()`. A panicking comparator unwinds
/// through the join points back to the caller; `dst` then holds valid elements in unspecified
/// order.
pub fn merge_by<T, F>(left: &[T], right: &[T], dst: &mut [T], compare: F, cutoff: usize) -> usize
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let total = left.len() + right.len();
    let is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;

    merge_recurse(left, right, &mut dst[..total], &is_less, cutoff);

    total
}

fn merge_recurse<T, F>(left: &[T], right: &[T], dst: &mut [T], is_less: &F, cutoff: usize)
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> bool + Sync,
{
    let total = left.len() + right.len();
    debug_assert_eq!(dst.len(), total);

    // Below the tolerance the recursion stops. Two elements or fewer always do: the midpoint
    // split below needs at least two elements in the larger operand.
    if total < cutoff || total <= 2 {
        sequential::merge_into(left, right, dst, &mut |a, b| is_less(a, b));
        return;
    }

    // The pivot is drawn from the larger operand, which bounds the binary search to the
    // smaller one and keeps the recursion depth balanced. The operands keep their left/right
    // roles; only the tie-breaking direction of the rank search flips with the pivot origin,
    // so equal elements still come out left-operand first.
    //
    // The midpoint index `len / 2 + len % 2` biases the extra element of an odd-sized operand
    // into the lower half.
    let (l_split, r_split, pivot_from_left) = if left.len() >= right.len() {
        let m = left.len() / 2 + left.len() % 2;
        (m, rank::split_point_right(right, &left[m], is_less), true)
    } else {
        let m = right.len() / 2 + right.len() % 2;
        (rank::split_point_left(left, &right[m], is_less), m, false)
    };

    let (l_lo, l_hi, r_lo, r_hi, pivot) = if pivot_from_left {
        (
            &left[..l_split],
            &left[l_split + 1..],
            &right[..r_split],
            &right[r_split..],
            &left[l_split],
        )
    } else {
        (
            &left[..l_split],
            &left[l_split..],
            &right[..r_split],
            &right[r_split + 1..],
            &right[r_split],
        )
    };

    // Everything in the low pair sorts at or before the pivot, everything in the high pair at
    // or after it, so the pivot's final position is already known. Splitting the destination
    // there hands each half-merge an exclusive region; the borrow checker enforces the
    // disjointness the algorithm relies on, and the halves run with zero synchronization.
    let (dst_lo, rest) = dst.split_at_mut(l_lo.len() + r_lo.len());
    rest[0] = pivot.clone();
    let dst_hi = &mut rest[1..];

    task::join(
        || merge_recurse(l_lo, r_lo, dst_lo, is_less, cutoff),
        || merge_recurse(l_hi, r_hi, dst_hi, is_less, cutoff),
    );
}
