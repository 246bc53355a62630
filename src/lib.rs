//! Generic sequence algorithms over positions with different traversal capabilities.
//!
//! Every algorithm works on a half-open range `[first, last)` of positions into a caller owned
//! [`Sequence`]. The capability tier of the sequence ([`Sequential`], [`Bidirectional`] or
//! [`RandomAccess`]) is resolved at compile time and selects the strategy used for distance
//! computation, advancing and partitioning.

pub mod checked;
pub mod containers;
pub mod distance;
pub mod merge;
pub mod non_modifying;
pub mod partition;
pub mod rotate;
pub mod search;
pub mod sort;
pub mod traversal;

pub use traversal::{
    Bidirectional, BidirectionalSequence, RandomAccess, RandomAccessSequence, ReverseTraversal,
    Sequence, SequenceMut, Sequential, Traversal,
};
