//! Times the crate against the standard library on the same inputs and checks that both agree.
//!
//! `VALS_COUNT` and `QUERIES_COUNT` override the input sizes.

use std::env;
use std::thread;
use std::time::{Duration, Instant};

use sort_test_tools::patterns;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct QueryResult {
    lower: usize,
    upper: usize,
    found: bool,
}

fn env_count(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(val) => val
            .parse()
            .unwrap_or_else(|err| panic!("Invalid {name} value '{val}': {err}")),
        Err(_) => default,
    }
}

fn time_call<R>(f: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = f();

    (start.elapsed(), result)
}

fn std_queries(v: &[i32], queries: &[i32]) -> Vec<QueryResult> {
    queries
        .iter()
        .map(|x| QueryResult {
            lower: v.partition_point(|val| val < x),
            upper: v.partition_point(|val| val <= x),
            found: v.binary_search(x).is_ok(),
        })
        .collect()
}

fn seq_algos_queries(v: &[i32], queries: &[i32]) -> Vec<QueryResult> {
    use seq_algos::search::{binary_search, lower_bound, upper_bound};

    queries
        .iter()
        .map(|x| QueryResult {
            lower: lower_bound(v, 0, v.len(), x),
            upper: upper_bound(v, 0, v.len(), x),
            found: binary_search(v, 0, v.len(), x),
        })
        .collect()
}

fn print_matches(results: &[QueryResult]) {
    let matches = results.iter().filter(|res| res.found).count();
    println!("Match: {matches}, no match: {}", results.len() - matches);
}

fn compare_search(vals_count: usize, queries_count: usize) {
    let max_val = i32::try_from(queries_count.max(1)).unwrap_or(i32::MAX);

    let mut v = patterns::random_uniform(vals_count, 0..max_val);
    v.sort();
    let queries = patterns::random_uniform(queries_count, 0..max_val);

    // Both run at the same time, each task times only itself.
    let ((std_time, std_res), (seq_time, seq_res)) = thread::scope(|s| {
        let std_task = s.spawn(|| time_call(|| std_queries(&v, &queries)));
        let seq_task = s.spawn(|| time_call(|| seq_algos_queries(&v, &queries)));

        let std_out = std_task
            .join()
            .unwrap_or_else(|_| panic!("std search task panicked"));
        let seq_out = seq_task
            .join()
            .unwrap_or_else(|_| panic!("seq_algos search task panicked"));

        (std_out, seq_out)
    });

    println!("std_time: {}ms", std_time.as_millis());
    println!("seq_algos_time: {}ms", seq_time.as_millis());

    if std_res == seq_res {
        println!("OK...");
    } else {
        println!("Failed...");
    }

    print_matches(&std_res);
    print_matches(&seq_res);
}

fn compare_one<T: PartialEq + std::fmt::Debug>(
    name: &str,
    std_fn: impl FnOnce() -> T,
    seq_fn: impl FnOnce() -> T,
) {
    let (std_time, expected) = time_call(std_fn);
    let (seq_time, got) = time_call(seq_fn);

    println!(
        "{name}: std_time: {}ms seq_algos_time: {}ms",
        std_time.as_millis(),
        seq_time.as_millis()
    );
    assert_eq!(expected, got, "{name} results differ");
}

fn compare_reorder(len: usize) {
    let input = patterns::random(len);

    compare_one(
        "quick_sort",
        || {
            let mut v = input.clone();
            v.sort_unstable();
            v
        },
        || {
            let mut v = input.clone();
            seq_algos::sort::quick_sort(v.as_mut_slice(), 0, len);
            v
        },
    );

    // Sort by the low bits only, equal keys keep their input order in both.
    compare_one(
        "merge_sort",
        || {
            let mut v = input.clone();
            v.sort_by_key(|val| val & 0xFF);
            v
        },
        || {
            let mut v = input.clone();
            seq_algos::sort::merge_sort_by(v.as_mut_slice(), 0, len, |a, b| (a & 0xFF) < (b & 0xFF));
            v
        },
    );

    let pred = |val: &i32| val % 2 == 0;
    compare_one(
        "partition",
        || input.iter().filter(|val| pred(val)).count(),
        || {
            let mut v = input.clone();
            let boundary = seq_algos::partition::partition(v.as_mut_slice(), 0, len, pred);
            assert!(seq_algos::partition::is_partitioned(v.as_slice(), 0, len, pred));
            boundary
        },
    );

    compare_one(
        "stable_partition",
        || {
            let (mut evens, odds): (Vec<i32>, Vec<i32>) = input.iter().partition(|val| pred(val));
            evens.extend(odds);
            evens
        },
        || {
            let mut v = input.clone();
            seq_algos::partition::stable_partition(v.as_mut_slice(), 0, len, pred);
            v
        },
    );

    let mid = len / 3;
    compare_one(
        "rotate",
        || {
            let mut v = input.clone();
            v.rotate_left(mid);
            v
        },
        || {
            let mut v = input.clone();
            seq_algos::rotate::rotate_slice(v.as_mut_slice(), mid);
            v
        },
    );
}

fn main() {
    let vals_count = env_count("VALS_COUNT", 100_000);
    let queries_count = env_count("QUERIES_COUNT", 10_000_000);

    // Fresh inputs on every run.
    patterns::disable_fixed_seed();

    compare_search(vals_count, queries_count);
    compare_reorder(vals_count);
}
