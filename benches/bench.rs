use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::patterns;

fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id);
            }

            affinity_already_set.set(true);
        }
    });
}

fn bench_sort(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [i32]),
) {
    // Pin the benchmark to the same core to improve repeatability.
    pin_thread_to_core();

    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{bench_name}-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [100usize, 1_000, 10_000, 100_000, 1_000_000];

    let test_patterns: Vec<(&str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("shuffled_range", patterns::shuffled_range),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw_mixed", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for test_size in test_sizes {
        for (pattern_name, pattern_provider) in &test_patterns {
            bench_sort(
                c,
                test_size,
                pattern_name,
                pattern_provider,
                "rust_smoothsort_unstable",
                |v| smoothsort::sort(v),
            );
            bench_sort(
                c,
                test_size,
                pattern_name,
                pattern_provider,
                "rust_std_unstable",
                |v| v.sort_unstable(),
            );
            bench_sort(
                c,
                test_size,
                pattern_name,
                pattern_provider,
                "rust_std_stable",
                |v| v.sort(),
            );
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
