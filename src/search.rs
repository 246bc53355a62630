//! Binary search over ranges that are sorted, or more generally partitioned with respect to the
//! searched key.
//!
//! All functions perform O(log n) comparisons. On tiers without random access each halving step
//! has to walk to the midpoint, so the total work there is O(n).

use crate::partition::partition_point;
use crate::traversal::Sequence;

/// Returns the first position `p` in `[first, last)` such that `!(*p < key)`, i.e. the earliest
/// position `key` could be inserted at without breaking the order.
#[inline]
pub fn lower_bound<S>(seq: &S, first: S::Position, last: S::Position, key: &S::Item) -> S::Position
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    lower_bound_by(seq, first, last, key, |a, b| a.lt(b))
}

/// Like [`lower_bound`] but ordered by the strict weak ordering `is_less`.
pub fn lower_bound_by<S, F>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    key: &S::Item,
    mut is_less: F,
) -> S::Position
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    partition_point(seq, first, last, |elem| is_less(elem, key))
}

/// Returns the first position `p` in `[first, last)` such that `key < *p`, i.e. the position one
/// past the last element equivalent to `key`.
#[inline]
pub fn upper_bound<S>(seq: &S, first: S::Position, last: S::Position, key: &S::Item) -> S::Position
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    upper_bound_by(seq, first, last, key, |a, b| a.lt(b))
}

pub fn upper_bound_by<S, F>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    key: &S::Item,
    mut is_less: F,
) -> S::Position
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    partition_point(seq, first, last, |elem| !is_less(key, elem))
}

/// Returns the sub-range `[lower_bound, upper_bound)` of elements equivalent to `key`.
#[inline]
pub fn equal_range<S>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    key: &S::Item,
) -> (S::Position, S::Position)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    equal_range_by(seq, first, last, key, |a, b| a.lt(b))
}

pub fn equal_range_by<S, F>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    key: &S::Item,
    mut is_less: F,
) -> (S::Position, S::Position)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let lower = lower_bound_by(seq, first, last.clone(), key, &mut is_less);
    // Everything before `lower` is less than `key`, no need to search it again.
    let upper = upper_bound_by(seq, lower.clone(), last, key, &mut is_less);

    (lower, upper)
}

/// Returns `true` if `[first, last)` contains an element equivalent to `key`.
#[inline]
pub fn binary_search<S>(seq: &S, first: S::Position, last: S::Position, key: &S::Item) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    binary_search_by(seq, first, last, key, |a, b| a.lt(b))
}

pub fn binary_search_by<S, F>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    key: &S::Item,
    mut is_less: F,
) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let pos = lower_bound_by(seq, first, last.clone(), key, &mut is_less);

    pos != last && !is_less(key, seq.at(&pos))
}
