use std::env;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::OnceCell;
use regex::Regex;

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id_2) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id_2);
            }

            affinity_already_set.set(true);
        }
    });
}

/// Filters benchmarks by the regex in `CUSTOM_BENCH_REGEX`, everything runs if it isn't set.
pub fn should_run_benchmark(name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    let filter_regex = FILTER_REGEX.get_or_init(|| {
        env::var("CUSTOM_BENCH_REGEX").ok().map(|filter_regex| {
            Regex::new(&filter_regex)
                .unwrap_or_else(|err| panic!("Invalid CUSTOM_BENCH_REGEX: {err}"))
        })
    });

    filter_regex
        .as_ref()
        .map(|reg| reg.is_match(name))
        .unwrap_or(true)
}

fn batch_size(test_len: usize) -> BatchSize {
    if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    }
}

#[inline(never)]
pub fn bench_fn<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    bench_name: &str,
    test_fn: impl Fn(&mut [T]),
) {
    bench_container(
        c,
        test_len,
        transform_name,
        pattern_name,
        bench_name,
        || transform(pattern_provider(test_len)),
        |test_data: &mut Vec<T>| test_fn(test_data.as_mut_slice()),
    );
}

/// Like [`bench_fn`] for inputs that are not slices. `setup` builds a fresh input per iteration
/// and is not part of the measurement.
#[inline(never)]
pub fn bench_container<C>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    pattern_name: &str,
    bench_name: &str,
    setup: impl Fn() -> C,
    test_fn: impl Fn(&mut C),
) {
    // Pin the benchmark to the same core to improve repeatability. Doing it this way allows
    // criterion to do other stuff with other threads, which greatly impacts overall benchmark
    // throughput.
    pin_thread_to_core();

    let bench_name_hot = format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_len}");
    if !should_run_benchmark(&bench_name_hot) {
        return;
    }

    c.bench_function(&bench_name_hot, |b| {
        b.iter_batched_ref(
            &setup,
            |test_data| {
                test_fn(black_box(&mut *test_data));
                black_box(test_data); // side-effect
            },
            batch_size(test_len),
        )
    });
}
