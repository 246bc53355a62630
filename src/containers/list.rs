use crate::containers::{impl_list_traits, Chain, Iter};
use crate::traversal::{Bidirectional, BidirectionalSequence, Sequence, SequenceMut};

/// Doubly linked list, the [`Bidirectional`] tier.
#[derive(Clone)]
pub struct List<T> {
    chain: Chain<T>,
    // Backward links, `prev[idx]` is the predecessor of node `idx`.
    prev: Vec<Option<usize>>,
}

impl<T> List<T> {
    pub const fn new() -> Self {
        Self {
            chain: Chain::new(),
            prev: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push_back(&mut self, value: T) {
        let tail = self.chain.tail;
        self.chain.push_back(value);
        self.prev.push(tail);
    }

    pub fn push_front(&mut self, value: T) {
        let idx = self.chain.push_front(value);
        self.prev.push(None);

        if let Some(old_head) = self.chain.next[idx] {
            self.prev[old_head] = Some(idx);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl_list_traits!(List);

impl<T> Sequence for List<T> {
    type Item = T;
    type Position = Option<usize>;
    type Traversal = Bidirectional;

    #[inline]
    fn begin(&self) -> Option<usize> {
        self.chain.head
    }

    #[inline]
    fn end(&self) -> Option<usize> {
        None
    }

    #[inline]
    fn increment(&self, pos: &mut Option<usize>) {
        self.chain.increment(pos);
    }

    #[inline]
    fn at(&self, pos: &Option<usize>) -> &T {
        self.chain.at(pos)
    }
}

impl<T> BidirectionalSequence for List<T> {
    #[inline]
    fn decrement(&self, pos: &mut Option<usize>) {
        *pos = match *pos {
            Some(idx) => self.prev[idx],
            None => self.chain.tail,
        };

        // Stepping back from the first position is a precondition violation.
        debug_assert!(pos.is_some());
    }
}

impl<T> SequenceMut for List<T> {
    #[inline]
    fn at_mut(&mut self, pos: &Option<usize>) -> &mut T {
        self.chain.at_mut(pos)
    }

    #[inline]
    fn swap_at(&mut self, a: &Option<usize>, b: &Option<usize>) {
        self.chain.swap_at(a, b);
    }
}
