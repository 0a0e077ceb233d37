use crate::common::{configure_criterion, load_order, price_order, validate_order};
use criterion::{criterion_group, Criterion};
use reason_rail::{ErrorReason, Outcome, ReasonTrail, ValueOutcome};
use std::hint::black_box;

pub fn bench_construction(c: &mut Criterion) {
    c.bench_function("core/ok", |b| b.iter(|| black_box(Outcome::ok())));

    c.bench_function("core/fail_with_metadata", |b| {
        b.iter(|| {
            black_box(Outcome::fail(
                ErrorReason::new("connection pool exhausted")
                    .with_metadata("host", "db-primary-01")
                    .with_metadata("retry", 3),
            ))
        })
    });

    c.bench_function("core/value_with_successes", |b| {
        b.iter(|| {
            black_box(
                ValueOutcome::ok(black_box(42u64))
                    .with_success("loaded")
                    .with_success("cached"),
            )
        })
    });
}

pub fn bench_bind(c: &mut Criterion) {
    c.bench_function("core/bind_success_chain", |b| {
        b.iter(|| {
            let priced = load_order(black_box(7))
                .bind_and_keep_value(validate_order)
                .bind(price_order);
            black_box(priced.is_success())
        })
    });

    c.bench_function("core/bind_short_circuit", |b| {
        b.iter(|| {
            let priced = load_order(black_box(10))
                .bind_and_keep_value(validate_order)
                .bind(price_order);
            black_box(priced.is_failed())
        })
    });
}

pub fn bench_trail_queries(c: &mut Criterion) {
    let outcome = (0..32).fold(Outcome::ok(), |acc, i| {
        if i % 8 == 7 {
            acc.with_error(format!("check {i} failed"))
        } else {
            acc.with_success(format!("check {i} passed"))
        }
    });

    c.bench_function("core/errors_count", |b| b.iter(|| black_box(outcome.errors().count())));
    c.bench_function("core/is_failed", |b| b.iter(|| black_box(outcome.is_failed())));
    c.bench_function("core/display", |b| b.iter(|| black_box(outcome.to_string())));
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_construction,
        bench_bind,
        bench_trail_queries,
}
