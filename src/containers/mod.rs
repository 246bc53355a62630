//! Node based sequences for the tiers slices can't represent.
//!
//! Both containers keep their elements in a single arena `Vec` and link them by index, positions
//! are node handles with `None` as the end position. Nodes are never removed, so positions stay
//! valid for the lifetime of the container.

use std::iter::FusedIterator;

mod forward_list;
mod list;

pub use forward_list::ForwardList;
pub use list::List;

/// The forward links both lists are built on. `next[idx]` is the successor of `values[idx]`.
#[derive(Clone)]
struct Chain<T> {
    values: Vec<T>,
    next: Vec<Option<usize>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Chain<T> {
    const fn new() -> Self {
        Self {
            values: Vec::new(),
            next: Vec::new(),
            head: None,
            tail: None,
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    /// Appends `value` and returns its node handle.
    fn push_back(&mut self, value: T) -> usize {
        let idx = self.values.len();
        self.values.push(value);
        self.next.push(None);

        match self.tail {
            Some(tail) => self.next[tail] = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);

        idx
    }

    /// Prepends `value` and returns its node handle.
    fn push_front(&mut self, value: T) -> usize {
        let idx = self.values.len();
        self.values.push(value);
        self.next.push(self.head);

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        idx
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            values: &self.values,
            next: &self.next,
            pos: self.head,
            remaining: self.values.len(),
        }
    }

    #[inline]
    fn increment(&self, pos: &mut Option<usize>) {
        match *pos {
            Some(idx) => *pos = self.next[idx],
            None => end_position_access(),
        }
    }

    #[inline]
    fn at(&self, pos: &Option<usize>) -> &T {
        match *pos {
            Some(idx) => &self.values[idx],
            None => end_position_access(),
        }
    }

    #[inline]
    fn at_mut(&mut self, pos: &Option<usize>) -> &mut T {
        match *pos {
            Some(idx) => &mut self.values[idx],
            None => end_position_access(),
        }
    }

    #[inline]
    fn swap_at(&mut self, a: &Option<usize>, b: &Option<usize>) {
        match (*a, *b) {
            (Some(a), Some(b)) => self.values.swap(a, b),
            _ => end_position_access(),
        }
    }
}

/// Iterator over the elements of a [`List`] or [`ForwardList`] in sequence order.
pub struct Iter<'a, T> {
    values: &'a [T],
    next: &'a [Option<usize>],
    pos: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let idx = self.pos?;
        self.pos = self.next[idx];
        self.remaining -= 1;

        Some(&self.values[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Collection traits shared by both lists, in terms of their `new`, `iter`, `len` and
/// `push_back`.
macro_rules! impl_list_traits {
    ($list:ident) => {
        impl<T> Default for $list<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $list<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_list().entries(self.iter()).finish()
            }
        }

        impl<T: PartialEq> PartialEq for $list<T> {
            fn eq(&self, other: &Self) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl<T: Eq> Eq for $list<T> {}

        impl<T> FromIterator<T> for $list<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut list = Self::new();
                list.extend(iter);
                list
            }
        }

        impl<T> Extend<T> for $list<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for value in iter {
                    self.push_back(value);
                }
            }
        }

        impl<'a, T> IntoIterator for &'a $list<T> {
            type Item = &'a T;
            type IntoIter = $crate::containers::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

use impl_list_traits;

#[cold]
#[inline(never)]
#[track_caller]
fn end_position_access() -> ! {
    panic!("Attempted to access the element at the end position");
}
