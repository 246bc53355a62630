use criterion::{black_box, Criterion};

use rand::prelude::*;

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
    search_fn: impl Fn(&[T], &T) -> usize,
) {
    let p_pattern_provider = |len: usize| -> Vec<i32> {
        // Limit the val to somewhere in the range of the ascending pattern.
        // Using mod is skewed randomness, I think it should be fine in this case.
        let rand_val = (rand::thread_rng().gen::<u32>() % len.max(1) as u32) as i32;

        // Inject the last value as the random value we will look for.
        let mut v = pattern_provider(len);
        v.push(rand_val);

        v
    };

    let p_test_fn = |v: &mut [T]| {
        let Some((key, rest)) = v.split_last() else {
            return;
        };

        black_box(search_fn(rest, key));
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
    if pattern_name != "ascending" {
        // We need sorted inputs.
        return;
    }

    bench_impl(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "seq_algos_lower_bound",
        |arr, key| seq_algos::search::lower_bound(arr, 0, arr.len(), key),
    );

    bench_impl(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "seq_algos_partition_point",
        |arr, key| seq_algos::partition::partition_point(arr, 0, arr.len(), |x| x < key),
    );

    bench_impl(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "rust_std_partition_point",
        |arr, key| arr.partition_point(|x| x < key),
    );
}
