//! Fitting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Weighted linear least squares across dataset sizes
//! - Nonlinear (Levenberg–Marquardt) fits for linear and exponential models
//! - Descriptive statistics on large series
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use std::hint::black_box;

use labfit_rs::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate noisy linear data with per-point measurement errors.
fn generate_linear_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.1).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 1.94 * xi + 0.15 + noise.sample(&mut rng))
        .collect();
    let err = vec![0.1; size];
    (x, y, err)
}

/// Generate noisy exponential-decay data.
fn generate_decay_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.01).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 5.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 2.0 * (-0.7 * xi).exp() + noise.sample(&mut rng))
        .collect();
    (x, y)
}

fn decay(x: f64, p: &[f64]) -> f64 {
    p[0] * (p[1] * x).exp()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_weighted_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_least_squares");
    for size in [100, 1_000, 10_000] {
        let (x, y, err) = generate_linear_data(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| weighted_least_squares(black_box(&x), black_box(&y), black_box(&err)))
        });
    }
    group.finish();
}

fn bench_curve_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_fit");
    let options = CurveFitOptions::default();

    for size in [100, 1_000] {
        let (x, y) = generate_decay_data(size, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("exponential", size), &size, |b, _| {
            b.iter(|| {
                curve_fit(
                    black_box(&decay),
                    black_box(&x),
                    black_box(&y),
                    black_box(&[1.0, -0.3]),
                    &options,
                )
            })
        });
    }
    group.finish();
}

fn bench_descriptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptive");
    let (x, y, _) = generate_linear_data(10_000, 13);

    group.bench_function("variance_10k", |b| b.iter(|| variance(black_box(&x))));
    group.bench_function("correlation_10k", |b| {
        b.iter(|| correlation_coefficient(black_box(&x), black_box(&y)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_weighted_fit,
    bench_curve_fit,
    bench_descriptive
);
criterion_main!(benches);
