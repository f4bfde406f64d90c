//! Benchmark for the synchronous fast path of Pending.
//!
//! # Benchmark Categories
//!
//! 1. **Fast Path**: combinators over an already complete `Pending`
//! 2. **Deferred Path**: the same chain over a `Pending` that has to be polled
//! 3. **Cancellable**: the deferred chain with a live token attached
//!
//! The fast path should neither box nor suspend, so the gap between the first
//! two groups is the cost of deferral.

#![cfg(feature = "async")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mettle::control::Maybe;
use mettle::effect::{CancellationToken, Pending};
use std::hint::black_box;

fn chain(source: Pending<Maybe<u64>>, length: usize) -> Pending<Maybe<u64>> {
    (0..length).fold(source, |pending, _| {
        pending.map(|x| x.wrapping_add(1)).filter(|x| x % 7 != 0)
    })
}

fn bench_fast_path(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pending_fast_path");
    for length in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |bencher, &length| {
            bencher.iter(|| {
                let pending = chain(Pending::ready(Maybe::from_value(black_box(1))), length);
                black_box(pending.into_outcome().ok())
            });
        });
    }
    group.finish();
}

fn bench_deferred_path(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let mut group = criterion.benchmark_group("pending_deferred_path");
    for length in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |bencher, &length| {
            bencher.to_async(&runtime).iter(|| async move {
                let source = Pending::from_future(async { Maybe::from_value(black_box(1)) });
                black_box(chain(source, length).await)
            });
        });
    }
    group.finish();
}

fn bench_cancellable(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let mut group = criterion.benchmark_group("pending_cancellable");
    for length in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |bencher, &length| {
            bencher.to_async(&runtime).iter(|| async move {
                let token = CancellationToken::new();
                let source = Pending::from_future(async { Maybe::from_value(black_box(1)) })
                    .with_cancellation(token);
                black_box(chain(source, length).await)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fast_path,
    bench_deferred_path,
    bench_cancellable
);
criterion_main!(benches);
