use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;

use rand::prelude::*;

use zipf::ZipfDistribution;

/// Provides a set of patterns useful for testing and benchmarking sorting
/// algorithms. Currently limited to i32 values.

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
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_rng();

    let dist = ZipfDistribution::new(len, exponent).unwrap();

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

    // Simulate pre-existing sorted slice, where len - sorted_percent are the
    // new unsorted values and part of the overall distribution.
    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn shuffled_range(len: usize) -> Vec<i32> {
    // Every value of 0..len exactly once, in random order. A sorted result
    // must be exactly the ascending range again.

    let mut v: Vec<i32> = (0..len as i32).collect();
    v.shuffle(&mut new_rng());

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

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort_unstable();
    }

    vals
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = len / saw_count.max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort_unstable();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// The seed is constant per process, so failures reproduce within a run.
/// Set the `OVERRIDE_SEED` env var to reproduce across runs.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        if let Ok(override_seed) = env::var("OVERRIDE_SEED") {
            u64::from_str(&override_seed).expect("OVERRIDE_SEED must be a u64")
        } else {
            thread_rng().gen()
        }
    })
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
