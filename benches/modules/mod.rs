use std::env;

use criterion::Criterion;

pub mod partition;
pub mod search;
pub mod sort;
pub mod util;

pub fn bench_len_type_pattern_combo<T: Ord + Clone + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if let Ok(env_val) = env::var("BENCH_OTHER") {
        match env_val.as_str() {
            "search" => {
                search::bench(
                    c,
                    test_len,
                    transform_name,
                    transform,
                    pattern_name,
                    pattern_provider,
                );
            }
            "partition" => {
                partition::bench(
                    c,
                    test_len,
                    transform_name,
                    transform,
                    pattern_name,
                    pattern_provider,
                );
            }
            _ => panic!(
                "Unknown BENCH_OTHER value: '{}'. Expected 'search' or 'partition'.",
                env_val
            ),
        }
    } else {
        sort::bench(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
        );
    }
}
