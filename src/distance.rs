//! Counting and moving positions.
//!
//! O(1) for random access sequences, O(n) stepping otherwise.

use crate::traversal::{BidirectionalSequence, ReverseTraversal, Sequence, Traversal};

/// Returns the number of increments needed to move `first` to `last`.
///
/// `last` must be reachable from `first` by stepping forward.
#[inline]
pub fn distance<S>(seq: &S, first: &S::Position, last: &S::Position) -> usize
where
    S: Sequence + ?Sized,
{
    <S::Traversal as Traversal<S>>::distance(seq, first, last)
}

/// Moves `pos` forward by `n` steps.
#[inline]
pub fn advance<S>(seq: &S, pos: &mut S::Position, n: usize)
where
    S: Sequence + ?Sized,
{
    <S::Traversal as Traversal<S>>::advance(seq, pos, n);
}

/// Returns `pos` advanced by `n` steps, leaving `pos` untouched.
#[inline]
pub fn next<S>(seq: &S, pos: &S::Position, n: usize) -> S::Position
where
    S: Sequence + ?Sized,
{
    let mut pos = pos.clone();
    advance(seq, &mut pos, n);
    pos
}

/// Moves `pos` backward by `n` steps.
#[inline]
pub fn retreat<S>(seq: &S, pos: &mut S::Position, n: usize)
where
    S: BidirectionalSequence + ?Sized,
    S::Traversal: ReverseTraversal<S>,
{
    <S::Traversal as ReverseTraversal<S>>::retreat(seq, pos, n);
}

/// Returns `pos` moved backward by `n` steps, leaving `pos` untouched.
#[inline]
pub fn prev<S>(seq: &S, pos: &S::Position, n: usize) -> S::Position
where
    S: BidirectionalSequence + ?Sized,
    S::Traversal: ReverseTraversal<S>,
{
    let mut pos = pos.clone();
    retreat(seq, &mut pos, n);
    pos
}
