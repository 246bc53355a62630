//! Partitioning a range by a unary predicate, and querying partitioned ranges.

use crate::distance::{distance, next};
use crate::rotate::rotate;
use crate::traversal::{BidirectionalSequence, Sequence, SequenceMut, Traversal};

/// Returns the first position in `[first, last)` whose element equals `value`, or `last`.
pub fn find<S>(seq: &S, first: S::Position, last: S::Position, value: &S::Item) -> S::Position
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    find_if(seq, first, last, |elem| elem == value)
}

/// Returns the first position in `[first, last)` whose element satisfies `pred`, or `last`.
pub fn find_if<S, P>(seq: &S, mut first: S::Position, last: S::Position, mut pred: P) -> S::Position
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while first != last && !pred(seq.at(&first)) {
        seq.increment(&mut first);
    }

    first
}

/// Returns the first position in `[first, last)` whose element does not satisfy `pred`, or
/// `last`.
pub fn find_if_not<S, P>(seq: &S, first: S::Position, last: S::Position, mut pred: P) -> S::Position
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    find_if(seq, first, last, |elem| !pred(elem))
}

/// Reorders `[first, last)` so that every element satisfying `pred` precedes every element that
/// doesn't, and returns the boundary position between the two groups.
///
/// The relative order inside the groups is not preserved. Sequential sequences use a single
/// forward pass, sequences that can step back converge from both ends with fewer swaps. Either
/// way `pred` is called O(n) times.
#[inline]
pub fn partition<S, P>(seq: &mut S, first: S::Position, last: S::Position, pred: P) -> S::Position
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    <S::Traversal as Traversal<S>>::partition(seq, first, last, pred)
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition_forward<S, P>(
    seq: &mut S,
    first: S::Position,
    last: S::Position,
    mut pred: P,
) -> S::Position
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    // The leading run of satisfying elements is already in place.
    let mut boundary = find_if_not(seq, first, last.clone(), &mut pred);
    if boundary == last {
        return boundary;
    }

    let mut pos = boundary.clone();
    seq.increment(&mut pos);

    while pos != last {
        if pred(seq.at(&pos)) {
            seq.swap_at(&pos, &boundary);
            seq.increment(&mut boundary);
        }
        seq.increment(&mut pos);
    }

    boundary
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition_bidirectional<S, P>(
    seq: &mut S,
    first: S::Position,
    mut last: S::Position,
    mut pred: P,
) -> S::Position
where
    S: SequenceMut + BidirectionalSequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    if first == last {
        return first;
    }

    let mut left = first;
    seq.decrement(&mut last);
    let mut right = last;

    loop {
        // Find the first element that doesn't satisfy `pred`.
        while left != right && pred(seq.at(&left)) {
            seq.increment(&mut left);
        }

        // Find the last element that does.
        while right != left && !pred(seq.at(&right)) {
            seq.decrement(&mut right);
        }

        if left == right {
            break;
        }

        seq.swap_at(&left, &right);

        // Both swapped elements are now in place, step over them. This also guarantees progress
        // if `pred` isn't consistent between calls.
        seq.increment(&mut left);
        if left == right {
            break;
        }
        seq.decrement(&mut right);
    }

    // The cursors met on an element that wasn't classified yet, or on the one just swapped right.
    if pred(seq.at(&left)) {
        seq.increment(&mut left);
    }

    left
}

/// Returns the first position in `[first, last)` whose element doesn't satisfy `pred`.
///
/// The range must already be partitioned by `pred`, all satisfying elements first. The search is
/// a binary search, O(log n) calls to `pred`.
pub fn partition_point<S, P>(
    seq: &S,
    mut first: S::Position,
    last: S::Position,
    mut pred: P,
) -> S::Position
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    // Invariant: every element before `first` satisfies `pred`, and the answer lies within the
    // `len` elements starting at `first`, or is the position right after them.
    let mut len = distance(seq, &first, &last);

    while len != 0 {
        let half = len / 2;
        let mid = next(seq, &first, half);

        if pred(seq.at(&mid)) {
            first = mid;
            seq.increment(&mut first);
            len -= half + 1;
        } else {
            len = half;
        }
    }

    first
}

/// Returns `true` if no element satisfying `pred` follows an element that doesn't.
pub fn is_partitioned<S, P>(seq: &S, first: S::Position, last: S::Position, mut pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    // Linear on purpose, `partition_point` assumes what we are trying to verify.
    let boundary = find_if_not(seq, first, last.clone(), &mut pred);

    find_if(seq, boundary, last.clone(), &mut pred) == last
}

/// Like [`partition`], but preserves the relative order of the elements in each group.
///
/// Works in place on every tier without allocating: both halves are partitioned recursively and
/// the two middle groups swapped with [`rotate`]. O(n log n) swaps, recursion depth O(log n).
pub fn stable_partition<S, P>(
    seq: &mut S,
    first: S::Position,
    last: S::Position,
    mut pred: P,
) -> S::Position
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let first = find_if_not(seq, first, last.clone(), &mut pred);
    let len = distance(seq, &first, &last);

    stable_partition_n(seq, first, len, &mut pred)
}

fn stable_partition_n<S, P>(seq: &mut S, first: S::Position, len: usize, pred: &mut P) -> S::Position
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    match len {
        0 => first,
        1 => {
            let mut boundary = first;
            if pred(seq.at(&boundary)) {
                seq.increment(&mut boundary);
            }
            boundary
        }
        _ => {
            let half = len / 2;
            let middle = next(seq, &first, half);

            // Swapping elements never moves positions, `middle` stays valid.
            let left_boundary = stable_partition_n(seq, first, half, pred);
            let right_boundary = stable_partition_n(seq, middle.clone(), len - half, pred);

            // [ T.. | F.. | T.. | F.. ] -> [ T.. | T.. | F.. | F.. ]
            rotate(seq, left_boundary, middle, right_boundary)
        }
    }
}
