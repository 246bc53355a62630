//! Quicksort and mergesort on top of the partition and merge primitives.
//!
//! Both work on every tier. Elements are cloned, the quicksort pivot is a copy of the middle
//! element and mergesort merges through a scratch buffer.

use crate::distance::{distance, next};
use crate::merge::merge_by;
use crate::partition::partition;
use crate::traversal::{Sequence, SequenceMut};

#[inline]
pub fn quick_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: SequenceMut + ?Sized,
    S::Item: Ord + Clone,
{
    quick_sort_by(seq, first, last, |a, b| a.lt(b));
}

/// Sorts `[first, last)` by `is_less`, not stable.
///
/// The pivot is the element in the middle position, the range is split three ways into less,
/// equivalent and greater elements with two [`partition`] calls. There is no pivot sampling, so
/// adversarial inputs can degrade this to O(n^2) comparisons. The stack depth however stays
/// O(log n) because only the smaller side is recursed into.
pub fn quick_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut is_less: F)
where
    S: SequenceMut + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    quicksort(seq, first, last, &mut is_less);
}

fn quicksort<S, F>(seq: &mut S, mut first: S::Position, mut last: S::Position, is_less: &mut F)
where
    S: SequenceMut + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        let len = distance(seq, &first, &last);
        if len < 2 {
            return;
        }

        // The partitions move elements around, so the pivot has to be a copy.
        let pivot = seq.at(&next(seq, &first, len / 2)).clone();

        let middle_lt = partition(seq, first.clone(), last.clone(), |elem| is_less(elem, &pivot));
        let middle_gt = partition(seq, middle_lt.clone(), last.clone(), |elem| {
            !is_less(&pivot, elem)
        });

        // [first, middle_lt) < pivot <= [middle_lt, middle_gt) <= pivot < [middle_gt, last)

        if middle_lt == middle_gt {
            // The pivot itself always lands in the middle band, unless `is_less` isn't a strict
            // weak ordering. Bail out instead of looping forever.
            return;
        }

        let left_len = distance(seq, &first, &middle_lt);
        let right_len = distance(seq, &middle_gt, &last);

        // Recurse into the smaller side, continue with the larger one.
        if left_len < right_len {
            quicksort(seq, first, middle_lt, is_less);
            first = middle_gt;
        } else {
            quicksort(seq, middle_gt, last, is_less);
            last = middle_lt;
        }
    }
}

#[inline]
pub fn merge_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: SequenceMut + ?Sized,
    S::Item: Ord + Clone,
{
    merge_sort_by(seq, first, last, |a, b| a.lt(b));
}

/// Sorts `[first, last)` by `is_less`, stable.
///
/// Top-down: sort both halves, merge them into a scratch buffer and move the result back. The
/// buffer is allocated once per call and reused by every merge, so the auxiliary space is O(n).
/// If `is_less` panics all original elements remain in the range.
pub fn merge_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut is_less: F)
where
    S: SequenceMut + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = distance(seq, &first, &last);
    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    let mut scratch = Vec::with_capacity(len);
    mergesort(seq, first, len, &mut scratch, &mut is_less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn mergesort<S, F>(
    seq: &mut S,
    first: S::Position,
    len: usize,
    scratch: &mut Vec<S::Item>,
    is_less: &mut F,
) where
    S: SequenceMut + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if len < 2 {
        return;
    }

    let half = len / 2;
    let middle = next(seq, &first, half);
    let last = next(seq, &middle, len - half);

    mergesort(seq, first.clone(), half, scratch, is_less);
    mergesort(seq, middle.clone(), len - half, scratch, is_less);

    scratch.clear();
    merge_by(
        &*seq,
        first.clone(),
        middle.clone(),
        &*seq,
        middle,
        last,
        scratch,
        &mut *is_less,
    );

    // Nothing was written to `seq` until here, a panic in `is_less` leaves it untouched.
    let mut pos = first;
    for elem in scratch.drain(..) {
        *seq.at_mut(&pos) = elem;
        seq.increment(&mut pos);
    }
}

#[inline]
pub fn is_sorted<S>(seq: &S, first: S::Position, last: S::Position) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    is_sorted_by(seq, first, last, |a, b| a.lt(b))
}

/// Returns `true` if no element in `[first, last)` is less than its predecessor.
pub fn is_sorted_by<S, F>(seq: &S, mut first: S::Position, last: S::Position, mut is_less: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if first == last {
        return true;
    }

    let mut prev = first.clone();
    seq.increment(&mut first);

    while first != last {
        if is_less(seq.at(&first), seq.at(&prev)) {
            return false;
        }

        prev = first.clone();
        seq.increment(&mut first);
    }

    true
}
