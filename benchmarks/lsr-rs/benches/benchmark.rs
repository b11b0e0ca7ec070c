//! Regression engine benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Batch fits from coordinate columns (1K to 100K points)
//! - Per-event engine cost for add, move and remove
//! - User line changes against large point sets
//! - Full vs Incremental running sums
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lsr_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy linear trend inside `[0, 100] x [0, 100]`.
fn generate_linear_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x_dist = Uniform::new(0.0, 100.0).unwrap();
    let noise_dist = Normal::new(0.0, 5.0).unwrap();

    let x: Vec<f64> = (0..size).map(|_| x_dist.sample(&mut rng)).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| (0.6 * xi + 20.0 + noise_dist.sample(&mut rng)).clamp(0.0, 100.0))
        .collect();
    (x, y)
}

fn populated_engine(mode: UpdateMode, x: &[f64], y: &[f64]) -> (RegressionEngine<f64>, Vec<PointId>) {
    let mut engine = Regression::new()
        .bounds(0.0, 0.0, 100.0, 100.0)
        .update_mode(mode)
        .build()
        .unwrap();
    let ids = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| engine.add_point(Point::new(xi, yi)).unwrap())
        .collect();
    (engine, ids)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_linear_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_fit");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (x, y) = generate_linear_data(size, 42);

        group.bench_with_input(BenchmarkId::new("columns", size), &size, |b, _| {
            b.iter(|| linear_fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_build_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_session");
    group.sample_size(20);

    for size in [100, 500, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (x, y) = generate_linear_data(size, 42);

        for mode in [Full, Incremental] {
            let label = format!("{:?}", mode);
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| populated_engine(mode, black_box(&x), black_box(&y)))
            });
        }
    }
    group.finish();
}

fn bench_move_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_point");
    group.sample_size(100);

    for size in [100, 1_000, 10_000] {
        let (x, y) = generate_linear_data(size, 42);

        for mode in [Full, Incremental] {
            let (mut engine, ids) = populated_engine(mode, &x, &y);
            let mut rng = StdRng::seed_from_u64(7);
            let label = format!("{:?}", mode);

            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    let id = ids[rng.random_range(0..ids.len())];
                    let to = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
                    engine.move_point(black_box(id), black_box(to)).unwrap()
                })
            });
        }
    }
    group.finish();
}

fn bench_add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_remove");
    group.sample_size(100);

    for size in [100, 1_000, 10_000] {
        let (x, y) = generate_linear_data(size, 42);
        let (mut engine, _) = populated_engine(Incremental, &x, &y);

        group.bench_with_input(BenchmarkId::new("incremental", size), &size, |b, _| {
            b.iter(|| {
                let id = engine.add_point(black_box(Point::new(50.0, 50.0))).unwrap();
                engine.remove_point(id).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_user_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("user_line");
    group.sample_size(100);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (x, y) = generate_linear_data(size, 42);
        let (mut engine, _) = populated_engine(Full, &x, &y);
        let mut angle = 0.0;

        group.bench_with_input(BenchmarkId::new("set_angle", size), &size, |b, _| {
            b.iter(|| {
                angle = if angle > 1.0 { -1.0 } else { angle + 0.01 };
                engine.set_angle(black_box(angle)).unwrap();
                engine.sum_of_squared_residuals(MyLine)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_linear_fit,
    bench_build_session,
    bench_move_point,
    bench_add_remove,
    bench_user_line,
);

criterion_main!(benches);
