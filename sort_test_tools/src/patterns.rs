use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

use zipf::ZipfDistribution;

/// Input patterns for testing and benchmarking the sequence algorithms.
/// Currently limited to i32 values.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_seed();

    // Zipf needs at least one element to draw from.
    let dist = match ZipfDistribution::new(len.max(1), exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("Invalid zipf exponent: {exponent}"),
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

/// Sorted values drawn from `0..distinct`, long runs of duplicates for small `distinct`.
pub fn sorted_dups(len: usize, distinct: i32) -> Vec<i32> {
    //       ::
    //   ::::::
    // ::::::::

    let mut v = random_uniform(len, 0..distinct.max(1));
    v.sort_unstable();

    v
}

/// Sorted values with gaps between them, every odd value is guaranteed to be absent.
pub fn sorted_even(len: usize) -> Vec<i32> {
    //      .
    //    . :
    //  . : :
    // ._._._

    let mut v: Vec<i32> = random_vec(len).into_iter().map(|val| val & !1).collect();
    v.sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Each call to a random pattern yields new values from here on, instead of the same values per
/// process. Meant for benchmarks.
pub fn disable_fixed_seed() {
    if env::var("OVERRIDE_SEED").is_ok() {
        panic!("Disabling the fixed seed conflicts with the external seed override.");
    }

    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed random patterns are derived from. Fixed per process unless [`disable_fixed_seed`]
/// was called, and taken from the `OVERRIDE_SEED` environment variable if set.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    if USE_FIXED_SEED.load(Ordering::Acquire) {
        *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
            Ok(seed) => u64::from_str(&seed)
                .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a valid u64: {seed}")),
            Err(_) => thread_rng().gen(),
        })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
