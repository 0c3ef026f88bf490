//! Benchmark for the memoization wrappers.
//!
//! Measures the key-serialization overhead of hits and misses, and the
//! mutex cost of the thread-safe variant.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnkit::cache::{Memoized, SyncMemoized};
use std::hint::black_box;

fn fibonacci(n: u64) -> u64 {
    match n {
        0 | 1 => n,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

fn benchmark_memoized_hit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoized_hit");

    let wrapped = Memoized::new(|n: &u64| fibonacci(*n));
    let _ = wrapped.call(&20); // warm the key

    group.bench_function("cached_fibonacci_20", |bencher| {
        bencher.iter(|| black_box(wrapped.call(black_box(&20))));
    });

    group.bench_function("uncached_fibonacci_20", |bencher| {
        bencher.iter(|| black_box(fibonacci(black_box(20))));
    });

    group.finish();
}

fn benchmark_memoized_miss(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoized_miss");

    // Each iteration uses a fresh wrapper: always a key miss
    for key_size in [1usize, 16, 256] {
        group.bench_with_input(
            BenchmarkId::new("vector_key_length", key_size),
            &key_size,
            |bencher, &key_size| {
                let key: Vec<u64> = (0..key_size as u64).collect();
                bencher.iter(|| {
                    let wrapped = Memoized::new(|values: &Vec<u64>| values.iter().sum::<u64>());
                    black_box(wrapped.call(black_box(&key)))
                });
            },
        );
    }

    group.finish();
}

fn benchmark_sync_memoized(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sync_memoized");

    let wrapped = SyncMemoized::new(|n: &u64| fibonacci(*n));
    let _ = wrapped.call(&20);

    group.bench_function("cached_hit_under_lock", |bencher| {
        bencher.iter(|| black_box(wrapped.call(black_box(&20))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_memoized_hit,
    benchmark_memoized_miss,
    benchmark_sync_memoized
);

criterion_main!(benches);
