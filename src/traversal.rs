//! Capability tiers for positions into a sequence.
//!
//! A [`Sequence`] hands out opaque positions and knows how to move them. What a position can do
//! depends on the tier the sequence declares through [`Sequence::Traversal`]:
//!
//! - [`Sequential`]: step forward by one, compare for equality.
//! - [`Bidirectional`]: additionally step back by one.
//! - [`RandomAccess`]: additionally move by an arbitrary offset and measure distances in O(1).
//!
//! The tag types implement [`Traversal`] only for sequences that provide the matching tier trait,
//! so a sequence declaring a tier it can't support is rejected at compile time.

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::partition;

/// A caller owned sequence addressed through positions.
///
/// Positions are only meaningful together with the sequence that produced them, and only for as
/// long as the sequence isn't structurally modified. Dereferencing the end position is a
/// precondition violation and panics.
pub trait Sequence {
    type Item;
    type Position: Clone + PartialEq + Debug;
    type Traversal: Traversal<Self>;

    fn begin(&self) -> Self::Position;

    fn end(&self) -> Self::Position;

    /// Moves `pos` one step towards the end.
    fn increment(&self, pos: &mut Self::Position);

    fn at(&self, pos: &Self::Position) -> &Self::Item;
}

pub trait BidirectionalSequence: Sequence {
    /// Moves `pos` one step towards the beginning.
    fn decrement(&self, pos: &mut Self::Position);
}

pub trait RandomAccessSequence: BidirectionalSequence {
    /// Moves `pos` by `n` steps in O(1), `n` may be negative.
    fn offset(&self, pos: &mut Self::Position, n: isize);

    /// Returns the signed number of steps from `from` to `to` in O(1).
    fn difference(&self, from: &Self::Position, to: &Self::Position) -> isize;
}

/// Sequences whose elements can be modified and exchanged in place.
pub trait SequenceMut: Sequence {
    fn at_mut(&mut self, pos: &Self::Position) -> &mut Self::Item;

    /// Exchanges the elements at `a` and `b`. `a == b` is allowed and does nothing.
    fn swap_at(&mut self, a: &Self::Position, b: &Self::Position);
}

/// Strategy selection per capability tier.
///
/// Implemented by the tag types, never by sequences themselves.
pub trait Traversal<S: Sequence + ?Sized> {
    /// Number of increments needed to move `first` to `last`.
    fn distance(seq: &S, first: &S::Position, last: &S::Position) -> usize;

    fn advance(seq: &S, pos: &mut S::Position, n: usize);

    /// Reorders `[first, last)` so that all elements satisfying `pred` come first and returns the
    /// boundary position.
    fn partition<P>(seq: &mut S, first: S::Position, last: S::Position, pred: P) -> S::Position
    where
        S: SequenceMut,
        P: FnMut(&S::Item) -> bool;
}

/// Backwards movement, only available for the tiers that can step back.
pub trait ReverseTraversal<S: BidirectionalSequence + ?Sized>: Traversal<S> {
    fn retreat(seq: &S, pos: &mut S::Position, n: usize);
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequential;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bidirectional;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RandomAccess;

fn count_steps<S: Sequence + ?Sized>(seq: &S, first: &S::Position, last: &S::Position) -> usize {
    let mut pos = first.clone();
    let mut steps = 0;
    while pos != *last {
        seq.increment(&mut pos);
        steps += 1;
    }

    steps
}

fn step_forward<S: Sequence + ?Sized>(seq: &S, pos: &mut S::Position, n: usize) {
    for _ in 0..n {
        seq.increment(pos);
    }
}

impl<S: Sequence + ?Sized> Traversal<S> for Sequential {
    #[inline]
    fn distance(seq: &S, first: &S::Position, last: &S::Position) -> usize {
        count_steps(seq, first, last)
    }

    #[inline]
    fn advance(seq: &S, pos: &mut S::Position, n: usize) {
        step_forward(seq, pos, n);
    }

    #[inline]
    fn partition<P>(seq: &mut S, first: S::Position, last: S::Position, pred: P) -> S::Position
    where
        S: SequenceMut,
        P: FnMut(&S::Item) -> bool,
    {
        partition::partition_forward(seq, first, last, pred)
    }
}

impl<S: BidirectionalSequence + ?Sized> Traversal<S> for Bidirectional {
    #[inline]
    fn distance(seq: &S, first: &S::Position, last: &S::Position) -> usize {
        count_steps(seq, first, last)
    }

    #[inline]
    fn advance(seq: &S, pos: &mut S::Position, n: usize) {
        step_forward(seq, pos, n);
    }

    #[inline]
    fn partition<P>(seq: &mut S, first: S::Position, last: S::Position, pred: P) -> S::Position
    where
        S: SequenceMut,
        P: FnMut(&S::Item) -> bool,
    {
        partition::partition_bidirectional(seq, first, last, pred)
    }
}

impl<S: BidirectionalSequence + ?Sized> ReverseTraversal<S> for Bidirectional {
    #[inline]
    fn retreat(seq: &S, pos: &mut S::Position, n: usize) {
        for _ in 0..n {
            seq.decrement(pos);
        }
    }
}

impl<S: RandomAccessSequence + ?Sized> Traversal<S> for RandomAccess {
    #[inline]
    fn distance(seq: &S, first: &S::Position, last: &S::Position) -> usize {
        let diff = seq.difference(first, last);
        debug_assert!(diff >= 0);

        diff as usize
    }

    #[inline]
    fn advance(seq: &S, pos: &mut S::Position, n: usize) {
        seq.offset(pos, n as isize);
    }

    #[inline]
    fn partition<P>(seq: &mut S, first: S::Position, last: S::Position, pred: P) -> S::Position
    where
        S: SequenceMut,
        P: FnMut(&S::Item) -> bool,
    {
        partition::partition_bidirectional(seq, first, last, pred)
    }
}

impl<S: RandomAccessSequence + ?Sized> ReverseTraversal<S> for RandomAccess {
    #[inline]
    fn retreat(seq: &S, pos: &mut S::Position, n: usize) {
        seq.offset(pos, -(n as isize));
    }
}

// --- Slices ---

impl<T> Sequence for [T] {
    type Item = T;
    type Position = usize;
    type Traversal = RandomAccess;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn increment(&self, pos: &mut usize) {
        *pos += 1;
    }

    #[inline]
    fn at(&self, pos: &usize) -> &T {
        &self[*pos]
    }
}

impl<T> BidirectionalSequence for [T] {
    #[inline]
    fn decrement(&self, pos: &mut usize) {
        *pos -= 1;
    }
}

impl<T> RandomAccessSequence for [T] {
    #[inline]
    fn offset(&self, pos: &mut usize, n: isize) {
        *pos = pos.wrapping_add_signed(n);
    }

    #[inline]
    fn difference(&self, from: &usize, to: &usize) -> isize {
        (*to as isize) - (*from as isize)
    }
}

impl<T> SequenceMut for [T] {
    #[inline]
    fn at_mut(&mut self, pos: &usize) -> &mut T {
        &mut self[*pos]
    }

    #[inline]
    fn swap_at(&mut self, a: &usize, b: &usize) {
        <[T]>::swap(self, *a, *b);
    }
}

// --- VecDeque ---

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Position = usize;
    type Traversal = RandomAccess;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn increment(&self, pos: &mut usize) {
        *pos += 1;
    }

    #[inline]
    fn at(&self, pos: &usize) -> &T {
        &self[*pos]
    }
}

impl<T> BidirectionalSequence for VecDeque<T> {
    #[inline]
    fn decrement(&self, pos: &mut usize) {
        *pos -= 1;
    }
}

impl<T> RandomAccessSequence for VecDeque<T> {
    #[inline]
    fn offset(&self, pos: &mut usize, n: isize) {
        *pos = pos.wrapping_add_signed(n);
    }

    #[inline]
    fn difference(&self, from: &usize, to: &usize) -> isize {
        (*to as isize) - (*from as isize)
    }
}

impl<T> SequenceMut for VecDeque<T> {
    #[inline]
    fn at_mut(&mut self, pos: &usize) -> &mut T {
        &mut self[*pos]
    }

    #[inline]
    fn swap_at(&mut self, a: &usize, b: &usize) {
        VecDeque::swap(self, *a, *b);
    }
}
