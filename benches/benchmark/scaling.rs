use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion};
use reason_rail::{Outcome, ReasonTrail, ValueOutcome};
use std::hint::black_box;

pub fn bench_bind_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/bind_depth");

    for depth in [1, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut outcome = ValueOutcome::ok(0u64);
                for step in 0..depth {
                    outcome = outcome.bind(|n| ValueOutcome::ok(n + step).with_success("step"));
                }
                black_box(outcome.reasons().len())
            })
        });
    }

    group.finish();
}

pub fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/merge");

    for width in [2, 16, 128] {
        let outcomes: Vec<Outcome> = (0..width)
            .map(|i| {
                if i % 4 == 0 {
                    Outcome::fail(format!("item {i} rejected"))
                } else {
                    Outcome::ok().with_success("item accepted")
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(width), &outcomes, |b, outcomes| {
            b.iter(|| black_box(Outcome::merge(outcomes.iter().cloned()).errors().count()))
        });
    }

    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets = bench_bind_depth, bench_merge,
}
