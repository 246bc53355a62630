use crate::containers::{impl_list_traits, Chain, Iter};
use crate::traversal::{Sequence, SequenceMut, Sequential};

/// Singly linked list, the [`Sequential`] tier.
///
/// Positions can only move forward, algorithms fall back to their single direction strategies.
#[derive(Clone)]
pub struct ForwardList<T> {
    chain: Chain<T>,
}

impl<T> ForwardList<T> {
    pub const fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push_front(&mut self, value: T) {
        self.chain.push_front(value);
    }

    pub fn push_back(&mut self, value: T) {
        self.chain.push_back(value);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl_list_traits!(ForwardList);

impl<T> Sequence for ForwardList<T> {
    type Item = T;
    type Position = Option<usize>;
    type Traversal = Sequential;

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

impl<T> SequenceMut for ForwardList<T> {
    #[inline]
    fn at_mut(&mut self, pos: &Option<usize>) -> &mut T {
        self.chain.at_mut(pos)
    }

    #[inline]
    fn swap_at(&mut self, a: &Option<usize>, b: &Option<usize>) {
        self.chain.swap_at(a, b);
    }
}
