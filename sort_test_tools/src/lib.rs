//! Shared test tooling: input patterns and generic conformance tests for sorts, partitions and
//! searches. Every implementation under test gets the same tests instantiated via the
//! `instantiate_*_tests!` macros.

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], is_less: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;
}

pub trait Partition {
    fn name() -> String;

    /// Partitions `arr` by `pred` and returns the number of elements satisfying it, which is the
    /// index of the boundary.
    fn partition<T, F>(arr: &mut [T], pred: F) -> usize
    where
        T: Clone,
        F: FnMut(&T) -> bool;
}

pub trait Search {
    fn name() -> String;

    fn lower_bound<T: Ord + Clone>(arr: &[T], key: &T) -> usize;

    fn upper_bound<T: Ord + Clone>(arr: &[T], key: &T) -> usize;

    fn binary_search<T: Ord + Clone>(arr: &[T], key: &T) -> bool;

    fn partition_point<T, F>(arr: &[T], pred: F) -> usize
    where
        T: Clone,
        F: FnMut(&T) -> bool;
}

pub mod patterns;
