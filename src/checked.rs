//! Precondition checking front-ends.
//!
//! The core algorithms trust their callers: an unsorted range passed to a search or an
//! unreachable end position yields an unspecified result. The functions here validate those
//! preconditions first, in O(n), and report violations as [`PreconditionError`] before delegating
//! to the core.

use thiserror::Error;

use crate::merge;
use crate::partition;
use crate::search;
use crate::traversal::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("end position not reachable from first position, hit the end of the sequence after {steps} steps")]
    Unreachable { steps: usize },
    #[error("range is not sorted, element at offset {offset} is less than its predecessor")]
    Unsorted { offset: usize },
    #[error("range is not partitioned, element at offset {offset} satisfies the predicate after one that did not")]
    NotPartitioned { offset: usize },
}

pub type Result<T> = std::result::Result<T, PreconditionError>;

/// Like [`crate::distance::distance`], but fails instead of running past the end of the sequence
/// when `last` is not reachable from `first`.
pub fn distance<S>(seq: &S, first: &S::Position, last: &S::Position) -> Result<usize>
where
    S: Sequence + ?Sized,
{
    let end = seq.end();
    let mut pos = first.clone();
    let mut steps = 0;

    while pos != *last {
        if pos == end {
            return Err(PreconditionError::Unreachable { steps });
        }

        seq.increment(&mut pos);
        steps += 1;
    }

    Ok(steps)
}

/// Checks that `[first, last)` is a valid range sorted by `is_less`.
pub fn check_sorted_by<S, F>(
    seq: &S,
    first: &S::Position,
    last: &S::Position,
    mut is_less: F,
) -> Result<()>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = distance(seq, first, last)?;
    if len < 2 {
        return Ok(());
    }

    let mut prev = first.clone();
    let mut pos = first.clone();
    seq.increment(&mut pos);

    for offset in 1..len {
        if is_less(seq.at(&pos), seq.at(&prev)) {
            return Err(PreconditionError::Unsorted { offset });
        }

        prev = pos.clone();
        seq.increment(&mut pos);
    }

    Ok(())
}

/// Checks that `[first, last)` is a valid range partitioned by `pred`.
pub fn check_partitioned<S, P>(
    seq: &S,
    first: &S::Position,
    last: &S::Position,
    mut pred: P,
) -> Result<()>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let len = distance(seq, first, last)?;

    let mut pos = first.clone();
    let mut seen_false = false;

    for offset in 0..len {
        let satisfied = pred(seq.at(&pos));
        if satisfied && seen_false {
            return Err(PreconditionError::NotPartitioned { offset });
        }

        seen_false |= !satisfied;
        seq.increment(&mut pos);
    }

    Ok(())
}

pub fn lower_bound<S>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    key: &S::Item,
) -> Result<S::Position>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    check_sorted_by(seq, &first, &last, |a, b| a.lt(b))?;

    Ok(search::lower_bound(seq, first, last, key))
}

pub fn upper_bound<S>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    key: &S::Item,
) -> Result<S::Position>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    check_sorted_by(seq, &first, &last, |a, b| a.lt(b))?;

    Ok(search::upper_bound(seq, first, last, key))
}

pub fn equal_range<S>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    key: &S::Item,
) -> Result<(S::Position, S::Position)>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    check_sorted_by(seq, &first, &last, |a, b| a.lt(b))?;

    Ok(search::equal_range(seq, first, last, key))
}

pub fn binary_search<S>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    key: &S::Item,
) -> Result<bool>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    check_sorted_by(seq, &first, &last, |a, b| a.lt(b))?;

    Ok(search::binary_search(seq, first, last, key))
}

pub fn partition_point<S, P>(
    seq: &S,
    first: S::Position,
    last: S::Position,
    mut pred: P,
) -> Result<S::Position>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    check_partitioned(seq, &first, &last, &mut pred)?;

    Ok(partition::partition_point(seq, first, last, pred))
}

/// Like [`crate::merge::merge`], but checks both inputs first. Nothing is written to `out` if a
/// check fails.
pub fn merge<S1, S2, O>(
    a: &S1,
    first1: S1::Position,
    last1: S1::Position,
    b: &S2,
    first2: S2::Position,
    last2: S2::Position,
    out: &mut O,
) -> Result<usize>
where
    S1: Sequence + ?Sized,
    S2: Sequence<Item = S1::Item> + ?Sized,
    S1::Item: Ord + Clone,
    O: Extend<S1::Item>,
{
    check_sorted_by(a, &first1, &last1, |x, y| x.lt(y))?;
    check_sorted_by(b, &first2, &last2, |x, y| x.lt(y))?;

    Ok(merge::merge(a, first1, last1, b, first2, last2, out))
}
