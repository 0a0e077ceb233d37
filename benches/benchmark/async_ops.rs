use crate::common::{configure_criterion, load_order, price_order, validate_order};
use criterion::{criterion_group, Criterion};
use reason_rail::{Outcome, ReasonTrail, ValueOutcome};
use std::hint::black_box;
use tokio::runtime::Runtime;

pub fn bench_bind_async(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("async/bind");

    group.bench_function("success_chain", |b| {
        b.iter(|| {
            rt.block_on(async {
                let priced = load_order(black_box(7))
                    .bind_and_keep_value_async(|order| async move { validate_order(&order) })
                    .await
                    .bind_async(|order| async move { price_order(order) })
                    .await;
                black_box(priced.is_success())
            })
        })
    });

    group.bench_function("short_circuit", |b| {
        b.iter(|| {
            rt.block_on(async {
                let skipped: ValueOutcome<u64> = Outcome::fail("upstream down")
                    .bind_async(|| async { ValueOutcome::ok(1) })
                    .await;
                black_box(skipped.is_failed())
            })
        })
    });

    group.finish();
}

pub fn bench_on_error_async(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("async/on_error_success_path", |b| {
        b.iter(|| rt.block_on(async { black_box(Outcome::ok().on_error_async(|| async {}).await) }))
    });
}

criterion_group! {
    name = async_ops_benches;
    config = configure_criterion();
    targets = bench_bind_async, bench_on_error_async,
}
