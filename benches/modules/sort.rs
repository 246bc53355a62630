use std::env;

use criterion::{black_box, Criterion};

use seq_algos::containers::List;
use seq_algos::Sequence;
use sort_test_tools::Sort;

use crate::modules::util;

macro_rules! sort_impl {
    ($name:ident, $display:literal, |$arr:ident| $sort:expr, |$arr_by:ident, $is_less:ident| $sort_by:expr) => {
        pub struct $name {}

        impl Sort for $name {
            fn name() -> String {
                $display.into()
            }

            fn sort<T>($arr: &mut [T])
            where
                T: Ord + Clone,
            {
                $sort
            }

            fn sort_by<T, F>($arr_by: &mut [T], mut $is_less: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> bool,
            {
                $sort_by
            }
        }
    };
}

sort_impl!(
    QuickSort,
    "seq_algos_quick_sort_unstable",
    |arr| {
        let len = arr.len();
        seq_algos::sort::quick_sort(arr, 0, len)
    },
    |arr, is_less| {
        let len = arr.len();
        seq_algos::sort::quick_sort_by(arr, 0, len, is_less)
    }
);

sort_impl!(
    MergeSort,
    "seq_algos_merge_sort_stable",
    |arr| {
        let len = arr.len();
        seq_algos::sort::merge_sort(arr, 0, len)
    },
    |arr, is_less| {
        let len = arr.len();
        seq_algos::sort::merge_sort_by(arr, 0, len, is_less)
    }
);

sort_impl!(
    StdUnstable,
    "rust_std_unstable",
    |arr| arr.sort_unstable(),
    |arr, is_less| arr.sort_unstable_by(|a, b| to_ordering(&mut is_less, a, b))
);

sort_impl!(
    StdStable,
    "rust_std_stable",
    |arr| arr.sort(),
    |arr, is_less| arr.sort_by(|a, b| to_ordering(&mut is_less, a, b))
);

fn to_ordering<T>(is_less: &mut impl FnMut(&T, &T) -> bool, a: &T, b: &T) -> std::cmp::Ordering {
    if is_less(a, b) {
        std::cmp::Ordering::Less
    } else if is_less(b, a) {
        std::cmp::Ordering::Greater
    } else {
        std::cmp::Ordering::Equal
    }
}

fn measure_comp_count<S: Sort, T: Ord + Clone + std::fmt::Debug>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 10_000 {
        3000
    } else if test_len < 100_000 {
        1000
    } else {
        100
    };

    let mut comp_count = 0u64;

    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a < b
        })
    }

    // If there is on average less than a single comparison this will be wrong.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

pub fn bench_fn<S: Sort, T: Ord + Clone + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!(
            "{}-comp-{}-{}-{}",
            bench_name, transform_name, pattern_name, test_len
        );

        if util::should_run_benchmark(&name) {
            measure_comp_count::<S, T>(&name, test_len, transform, pattern_provider);
        }
    } else {
        util::bench_fn(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

/// Sorting a linked list exercises the bidirectional code paths, the list is built outside of the
/// measurement.
fn bench_list<T: Ord + Clone>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let setup = || -> List<T> { transform(pattern_provider(test_len)).into_iter().collect() };

    util::bench_container(
        c,
        test_len,
        transform_name,
        pattern_name,
        "seq_algos_list_quick_sort_unstable",
        setup,
        |list| {
            let (first, last) = (list.begin(), list.end());
            seq_algos::sort::quick_sort(list, first, last);
        },
    );

    util::bench_container(
        c,
        test_len,
        transform_name,
        pattern_name,
        "seq_algos_list_merge_sort_stable",
        setup,
        |list| {
            let (first, last) = (list.begin(), list.end());
            seq_algos::sort::merge_sort(list, first, last);
        },
    );
}

pub fn bench<T: Ord + Clone + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    macro_rules! bench_inst {
        ($sort_impl:ty) => {{
            bench_fn::<$sort_impl, T>(
                c,
                test_len,
                transform_name,
                transform,
                pattern_name,
                pattern_provider,
            );
        }};
    }

    // --- Stable sorts ---

    bench_inst!(MergeSort);
    bench_inst!(StdStable);

    // --- Unstable sorts ---

    bench_inst!(QuickSort);
    bench_inst!(StdUnstable);

    if test_len <= 100_000 && env::var("MEASURE_COMP").is_err() {
        bench_list(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
        );
    }
}
