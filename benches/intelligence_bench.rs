// ABOUTME: Criterion benchmarks for the trend and goal intelligence calculators
// ABOUTME: Measures regression, timeline, period and document normalization cost by history length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the intelligence calculators.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use bodylog_core::models::Metric;
use bodylog_intelligence::{
    GoalProgressCalculator, GoalTimelineEstimator, PeriodInsightCalculator, WeightedTrendAnalyzer,
};
use bodylog_server::services::InsightService;
use chrono::{DateTime, NaiveTime, Utc};
use common::fixtures::{anchor, daily_series, document, SeriesSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [SeriesSize; 3] = [SeriesSize::Month, SeriesSize::Year, SeriesSize::Archive];

fn as_of() -> DateTime<Utc> {
    anchor().and_time(NaiveTime::MIN).and_utc()
}

fn bench_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression");

    for size in SIZES {
        let series = daily_series(size);
        group.throughput(Throughput::Elements(series.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("window_30", size.label()),
            &series,
            |b, series| {
                b.iter(|| {
                    WeightedTrendAnalyzer::regress_at(
                        black_box(series),
                        Metric::Weight,
                        30,
                        as_of(),
                    )
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("window_365", size.label()),
            &series,
            |b, series| {
                b.iter(|| {
                    WeightedTrendAnalyzer::regress_at(
                        black_box(series),
                        Metric::Weight,
                        365,
                        as_of(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_goal_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_timeline");
    let estimator = GoalTimelineEstimator::new();

    for size in SIZES {
        let series = daily_series(size);
        let current = series[0].weight;
        group.bench_with_input(
            BenchmarkId::new("estimate", size.label()),
            &series,
            |b, series| {
                b.iter(|| {
                    estimator.estimate_at(
                        black_box(series),
                        Metric::Weight,
                        current,
                        Some(70.0),
                        as_of(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_progress_and_periods(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress_and_periods");

    for size in SIZES {
        let series = daily_series(size);
        group.bench_with_input(
            BenchmarkId::new("progress", size.label()),
            &series,
            |b, series| {
                b.iter(|| {
                    GoalProgressCalculator::progress_for_metric(
                        78.0,
                        72.0,
                        Metric::Weight,
                        black_box(series),
                    )
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("standard_periods", size.label()),
            &series,
            |b, series| {
                b.iter(|| PeriodInsightCalculator::standard_periods(black_box(series), anchor()));
            },
        );
    }

    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    let service = InsightService::default();

    for size in SIZES {
        let doc = document(size);
        group.bench_with_input(
            BenchmarkId::new("summary", size.label()),
            &doc,
            |b, doc| {
                b.iter(|| service.summary_at(black_box(doc), as_of()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("normalize", size.label()),
            &doc,
            |b, doc| {
                b.iter(|| {
                    let mut copy = doc.clone();
                    copy.measurements.reverse();
                    copy.normalize();
                    copy
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("serialize", size.label()),
            &doc,
            |b, doc| {
                b.iter(|| serde_json::to_vec_pretty(black_box(doc)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_regression,
    bench_goal_timeline,
    bench_progress_and_periods,
    bench_document
);
criterion_main!(benches);
