//! Merging two sorted inputs into one sorted output.
//!
//! Merging is stable: if an element of the first input is equivalent to an element of the second
//! input, the one from the first input is emitted first.

use std::iter::{self, FusedIterator, Peekable};

use crate::traversal::Sequence;

/// Merges the sorted ranges `[first1, last1)` of `a` and `[first2, last2)` of `b` into `out` and
/// returns the number of elements written.
#[inline]
pub fn merge<S1, S2, O>(
    a: &S1,
    first1: S1::Position,
    last1: S1::Position,
    b: &S2,
    first2: S2::Position,
    last2: S2::Position,
    out: &mut O,
) -> usize
where
    S1: Sequence + ?Sized,
    S2: Sequence<Item = S1::Item> + ?Sized,
    S1::Item: Ord + Clone,
    O: Extend<S1::Item>,
{
    merge_by(a, first1, last1, b, first2, last2, out, |x, y| x.lt(y))
}

#[allow(clippy::too_many_arguments)]
pub fn merge_by<S1, S2, O, F>(
    a: &S1,
    mut first1: S1::Position,
    last1: S1::Position,
    b: &S2,
    mut first2: S2::Position,
    last2: S2::Position,
    out: &mut O,
    mut is_less: F,
) -> usize
where
    S1: Sequence + ?Sized,
    S2: Sequence<Item = S1::Item> + ?Sized,
    S1::Item: Clone,
    O: Extend<S1::Item>,
    F: FnMut(&S1::Item, &S1::Item) -> bool,
{
    let mut written = 0;

    while first1 != last1 && first2 != last2 {
        let elem_a = a.at(&first1);
        let elem_b = b.at(&first2);

        // Only take from `b` if strictly less, that keeps ties in input order.
        if is_less(elem_b, elem_a) {
            out.extend(iter::once(elem_b.clone()));
            b.increment(&mut first2);
        } else {
            out.extend(iter::once(elem_a.clone()));
            a.increment(&mut first1);
        }

        written += 1;
    }

    while first1 != last1 {
        out.extend(iter::once(a.at(&first1).clone()));
        a.increment(&mut first1);
        written += 1;
    }

    while first2 != last2 {
        out.extend(iter::once(b.at(&first2).clone()));
        b.increment(&mut first2);
        written += 1;
    }

    written
}

/// Lazily merges two sorted single-pass iterators.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Merge<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    a: Peekable<I>,
    b: Peekable<J>,
    is_less: F,
}

/// Merges two sorted iterators into one sorted iterator.
pub fn merge_iter<I, J>(
    a: I,
    b: J,
) -> Merge<I::IntoIter, J::IntoIter, fn(&I::Item, &I::Item) -> bool>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Ord,
{
    let is_less: fn(&I::Item, &I::Item) -> bool = <I::Item as PartialOrd>::lt;
    merge_iter_by(a, b, is_less)
}

pub fn merge_iter_by<I, J, F>(a: I, b: J, is_less: F) -> Merge<I::IntoIter, J::IntoIter, F>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    Merge {
        a: a.into_iter().peekable(),
        b: b.into_iter().peekable(),
        is_less,
    }
}

impl<I, J, F> Iterator for Merge<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let take_b = match (self.a.peek(), self.b.peek()) {
            (Some(elem_a), Some(elem_b)) => (self.is_less)(elem_b, elem_a),
            (Some(_), None) => false,
            (None, _) => true,
        };

        if take_b {
            self.b.next()
        } else {
            self.a.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();

        let upper = match (a_upper, b_upper) {
            (Some(x), Some(y)) => x.checked_add(y),
            _ => None,
        };

        (a_lower.saturating_add(b_lower), upper)
    }
}

impl<I, J, F> FusedIterator for Merge<I, J, F>
where
    I: FusedIterator,
    J: FusedIterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
}
