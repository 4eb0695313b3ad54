// ABOUTME: Criterion benchmarks for workout factory, calculators and formatting
// ABOUTME: Measures package validation, summary computation and full runner throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the workout tracker pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use workout_tracker::factory::read_package;
use workout_tracker::formatters::OutputFormat;
use workout_tracker::runner::{run_packages, sample_packages, Package};

/// Packages per batch for runner throughput
const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for package in sample_packages() {
        group.bench_with_input(
            BenchmarkId::new("read_and_summarize", &package.code),
            &package,
            |b, package| {
                b.iter(|| {
                    read_package(black_box(&package.code), black_box(&package.data))
                        .map(|workout| workout.summary())
                });
            },
        );
    }

    group.finish();
}

fn bench_runner(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner");
    let samples = sample_packages();

    for size in BATCH_SIZES {
        let packages: Vec<Package> = samples.iter().cycle().take(size).cloned().collect();
        group.throughput(Throughput::Elements(size as u64));

        for format in [OutputFormat::Text, OutputFormat::Json] {
            group.bench_with_input(
                BenchmarkId::new(format.as_str(), size),
                &packages,
                |b, packages| {
                    b.iter(|| {
                        let mut sink = Vec::with_capacity(packages.len() * 128);
                        run_packages(black_box(packages), format, &mut sink)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_summary, bench_runner);
criterion_main!(benches);
