//! Linear queries and element-wise operations over a range.

use crate::partition::{find_if, find_if_not};
use crate::traversal::{Sequence, SequenceMut};

pub fn all_of<S, P>(seq: &S, first: S::Position, last: S::Position, pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    find_if_not(seq, first, last.clone(), pred) == last
}

pub fn any_of<S, P>(seq: &S, first: S::Position, last: S::Position, pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    find_if(seq, first, last.clone(), pred) != last
}

pub fn none_of<S, P>(seq: &S, first: S::Position, last: S::Position, pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    !any_of(seq, first, last, pred)
}

/// Calls `f` on every element of `[first, last)` in order.
pub fn for_each<S, F>(seq: &S, mut first: S::Position, last: S::Position, mut f: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item),
{
    while first != last {
        f(seq.at(&first));
        seq.increment(&mut first);
    }
}

/// Calls `f` on at most the first `n` elements of `[first, last)` and returns the position after
/// the last visited element.
pub fn for_each_n<S, F>(
    seq: &S,
    mut first: S::Position,
    last: S::Position,
    n: usize,
    mut f: F,
) -> S::Position
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item),
{
    let mut visited = 0;
    while visited < n && first != last {
        f(seq.at(&first));
        seq.increment(&mut first);
        visited += 1;
    }

    first
}

pub fn count<S>(seq: &S, first: S::Position, last: S::Position, value: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    count_if(seq, first, last, |elem| elem == value)
}

pub fn count_if<S, P>(seq: &S, first: S::Position, last: S::Position, mut pred: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut matches = 0;
    for_each(seq, first, last, |elem| {
        if pred(elem) {
            matches += 1;
        }
    });

    matches
}

/// Writes `op(elem)` for every element of `[first, last)` of `src` into `dst`, starting at
/// `d_first`. Returns the position in `dst` after the last written element.
///
/// `dst` must have room for as many elements as the source range.
pub fn transform<S, D, F>(
    src: &S,
    mut first: S::Position,
    last: S::Position,
    dst: &mut D,
    mut d_first: D::Position,
    mut op: F,
) -> D::Position
where
    S: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
    F: FnMut(&S::Item) -> D::Item,
{
    while first != last {
        *dst.at_mut(&d_first) = op(src.at(&first));
        src.increment(&mut first);
        dst.increment(&mut d_first);
    }

    d_first
}

/// Replaces every element of `[first, last)` with `op(elem)`.
pub fn transform_in_place<S, F>(seq: &mut S, mut first: S::Position, last: S::Position, mut op: F)
where
    S: SequenceMut + ?Sized,
    F: FnMut(&S::Item) -> S::Item,
{
    while first != last {
        let value = op(seq.at(&first));
        *seq.at_mut(&first) = value;
        seq.increment(&mut first);
    }
}
