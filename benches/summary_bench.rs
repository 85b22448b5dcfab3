// ABOUTME: Criterion benchmarks for workout dispatch and summary computation
// ABOUTME: Measures package parsing, dispatch, and report rendering per activity type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the summary pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use workout_tracker::formatters::{format_reports, OutputFormat};
use workout_tracker::intelligence::{
    demo_packages, read_package, summarize_packages, SensorPackage, Training,
};

/// Batch size for the end-to-end benchmark
const BATCH_SIZE: usize = 1000;

fn generate_packages(count: usize) -> Vec<SensorPackage> {
    demo_packages().into_iter().cycle().take(count).collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for package in demo_packages() {
        group.bench_with_input(
            BenchmarkId::new("read_and_summarize", &package.code),
            &package,
            |b, package| {
                b.iter(|| {
                    read_package(black_box(&package.code), black_box(&package.values))
                        .and_then(|workout| workout.summary())
                });
            },
        );
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_package", |b| {
        b.iter(|| black_box("SWM:720,1,80,25,40").parse::<SensorPackage>());
    });
}

fn bench_batch(c: &mut Criterion) {
    let packages = generate_packages(BATCH_SIZE);
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));

    group.bench_function("summarize", |b| {
        b.iter(|| summarize_packages(black_box(&packages)));
    });

    let reports = summarize_packages(&packages).unwrap();
    for format in [OutputFormat::Text, OutputFormat::Json] {
        group.bench_with_input(
            BenchmarkId::new("format", format),
            &reports,
            |b, reports| {
                b.iter(|| format_reports(black_box(reports), format));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_parse, bench_batch);
criterion_main!(benches);
