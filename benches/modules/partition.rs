use criterion::{black_box, Criterion};

use crate::modules::util::bench_fn;

#[inline(never)]
fn bench_impl<T: Ord + Clone + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    partition_fn: impl Fn(&mut [T], &T) -> usize,
) {
    // The last element is the pivot, the rest gets partitioned around it.
    let p_pattern_provider = |len: usize| -> Vec<i32> {
        let mut v = pattern_provider(len);
        let pivot = v.get(len / 2).copied().unwrap_or(0);
        v.push(pivot);

        v
    };

    let p_test_fn = |v: &mut [T]| {
        let Some((pivot, rest)) = v.split_last_mut() else {
            return;
        };

        black_box(partition_fn(rest, pivot));
    };

    bench_fn(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        p_pattern_provider,
        bench_name,
        p_test_fn,
    )
}

pub fn bench<T: Ord + Clone + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    bench_impl(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "seq_algos_partition_unstable",
        |arr, pivot| {
            let len = arr.len();
            seq_algos::partition::partition(arr, 0, len, |x| x < pivot)
        },
    );

    bench_impl(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "seq_algos_stable_partition_stable",
        |arr, pivot| {
            let len = arr.len();
            seq_algos::partition::stable_partition(arr, 0, len, |x| x < pivot)
        },
    );

    bench_impl(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "lomuto_swap_partition_unstable",
        |arr, pivot| {
            // Single pass swap loop as baseline, std has no stabilized in-place partition.
            let mut boundary = 0;
            for i in 0..arr.len() {
                if arr[i] < *pivot {
                    arr.swap(boundary, i);
                    boundary += 1;
                }
            }
            boundary
        },
    );
}
