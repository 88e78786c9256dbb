//! Benchmarks for the secirba-formula engine.
//!
//! Run with: cargo bench -p secirba-formula --features parallel

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use secirba_core::{ExposureType, Seniority, TranchePoints};
use secirba_formula::parameter::ParameterInputs;
use secirba_formula::prelude::*;

fn bench_compute_kssa(c: &mut Criterion) {
    c.bench_function("compute_kssa", |b| {
        b.iter(|| {
            compute_kssa(
                black_box(0.10),
                black_box(0.05),
                black_box(0.30),
                black_box(0.5),
            )
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    let tranche = TranchePoints::new(0.20, 0.80).unwrap();
    let shift = ParameterMode::maturity_shift(0.5);
    let calibrated = ParameterMode::Calibrated(ParameterInputs {
        exposure_type: ExposureType::NonRetail,
        seniority: Seniority::NonSenior,
        effective_count: 20.0,
        lgd: 0.45,
        maturity_years: 1,
    });

    let mut group = c.benchmark_group("sweep");
    for points in [200usize, 2_000, 20_000] {
        let grid = SweepGrid::new(0.01, 0.30, points);
        group.throughput(Throughput::Elements(grid.len() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", points), &grid, |b, grid| {
            b.iter(|| sweep(&tranche, grid, &shift, &SweepOptions::sequential()))
        });
        group.bench_with_input(BenchmarkId::new("default", points), &grid, |b, grid| {
            b.iter(|| sweep(&tranche, grid, &shift, &SweepOptions::default()))
        });
        group.bench_with_input(BenchmarkId::new("calibrated", points), &grid, |b, grid| {
            b.iter(|| sweep(&tranche, grid, &calibrated, &SweepOptions::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_kssa, bench_sweep);
criterion_main!(benches);
