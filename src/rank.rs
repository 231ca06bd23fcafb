//! Split-point searches used by the recursive merge to find, for a pivot taken from one sorted
//! operand, the matching position in the other one.
//!
//! The two directions differ in how they break ties, and that difference is what keeps the
//! merge stable: a pivot drawn from the left operand must precede every equal right-side
//! element, a pivot drawn from the right operand must follow every equal left-side element.

/// First index in the sorted `right` operand whose element is not strictly less than `pivot`
/// (lower bound). Use when the pivot comes from the left operand: equal right-side elements
/// end up after the pivot.
pub fn split_point_right<T, F>(right: &[T], pivot: &T, is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    partition_point(right, |elem| is_less(elem, pivot))
}

/// First index in the sorted `left` operand whose element is strictly greater than `pivot`
/// (upper bound). Use when the pivot comes from the right operand: equal left-side elements
/// stay before the pivot.
pub fn split_point_left<T, F>(left: &[T], pivot: &T, is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    partition_point(left, |elem| !is_less(pivot, elem))
}

/// Index of the first element for which `pred` is false. `v` must be partitioned under `pred`.
fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // std impl as of Rust 1.69
    use std::cmp::Ordering::{Greater, Less};

    v.binary_search_by(|x| if pred(x) { Less } else { Greater })
        .unwrap_or_else(|i| i)
}
