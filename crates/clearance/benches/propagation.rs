//! Criterion micro-benchmarks for wavefront propagation and placement queries.

use clearance::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

/// Benchmark: full convergence of a single obstacle on a 256x256 grid.
fn bench_converge_256(c: &mut Criterion) {
    c.bench_function("converge_256x256", |b| {
        b.iter(|| {
            let mut field = GridField::new(256, 256).unwrap();
            let touched = field.stamp_disc(128, 128, 2.0);
            let mut prop = WavefrontPropagator::new();
            prop.seed(&touched);
            while prop.step(&field, 64.0) > 0 {}
            black_box(field.distance_at(field.index(64, 64)));
        });
    });
}

/// Benchmark: one mid-propagation ring on a wide frontier.
fn bench_single_ring(c: &mut Criterion) {
    c.bench_function("single_ring_256x256", |b| {
        b.iter_batched(
            || {
                let mut field = GridField::new(256, 256).unwrap();
                let touched = field.stamp_disc(128, 128, 2.0);
                let mut prop = WavefrontPropagator::new();
                prop.seed(&touched);
                // Grow the frontier to a representative mid-run width.
                for _ in 0..20 {
                    prop.step(&field, 64.0);
                }
                (field, prop)
            },
            |(field, mut prop)| {
                black_box(prop.step(&field, 64.0));
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

/// Benchmark: 10K nearest-free queries against a converged field.
fn bench_nearest_free(c: &mut Criterion) {
    let mut pf = PlacementField::new(PlacementConfig {
        width: 100,
        height: 100,
        inflation_radius: 30.0,
        step_budget: Duration::from_millis(5),
    })
    .unwrap();
    pf.add_obstacle(50, 50, 4.0, None);
    pf.complete_now();

    c.bench_function("nearest_free_100x100_10k", |b| {
        b.iter(|| {
            for y in 0..100 {
                for x in 0..100 {
                    black_box(pf.find_closest_available(x, y, 3.0));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_converge_256,
    bench_single_ring,
    bench_nearest_free
);
criterion_main!(benches);
