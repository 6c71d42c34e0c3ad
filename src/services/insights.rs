// ABOUTME: Insight service assembling dashboard views from the stored document
// ABOUTME: Combines trend, progress, timeline and period calculators into serializable view models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use bodylog_core::models::{Measurement, Metric};
use bodylog_core::units::{bmi, round_to, BmiCategory};
use bodylog_intelligence::{
    BodyCompositionSource, GoalProgressCalculator, GoalTimelineEstimator, PeriodInsight,
    PeriodInsightCalculator, RegressionResult, StandardPeriods, TimelineEstimate,
    TimelineFailure, WeightedTrendAnalyzer,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Progress toward one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Metric the goal is set on
    pub metric: Metric,
    /// Latest value
    pub current: f64,
    /// Goal target
    pub target: f64,
    /// Value in the oldest measurement
    pub initial: f64,
    /// Percentage of the way from `initial` to `target`, 0 to 100
    pub percent: f64,
}

/// Goal timeline for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTimeline {
    /// Metric being forecast
    pub metric: Metric,
    /// Latest value, if any measurement exists
    pub current: Option<f64>,
    /// Goal target, if set
    pub goal: Option<f64>,
    /// Lookback window used for the trend
    pub window_days: u32,
    /// Forecast or failure reason
    pub estimate: TimelineEstimate,
}

/// Raw trend for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrend {
    /// Metric the trend was fitted on
    pub metric: Metric,
    /// Lookback window
    pub window_days: u32,
    /// Regression, or `null` when too little data falls in the window
    pub trend: Option<RegressionResult>,
}

/// Body mass index with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyMassIndex {
    /// BMI rounded to one decimal
    pub value: f64,
    /// WHO category
    pub category: BmiCategory,
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Instant the summary was computed for
    pub as_of: DateTime<Utc>,
    /// Most recent measurement
    pub latest: Option<Measurement>,
    /// Recorded height
    pub height_cm: f64,
    /// BMI from the latest weight and the recorded height
    pub bmi: Option<BodyMassIndex>,
    /// Progress for every metric that has a goal
    pub progress: Vec<GoalProgress>,
    /// Goal timeline for every metric
    pub timelines: Vec<MetricTimeline>,
    /// Changes over the last 7, 30 and 90 days
    pub periods: StandardPeriods,
}

/// Computes insights over a [`BodyCompositionSource`]
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightService {
    estimator: GoalTimelineEstimator,
}

impl InsightService {
    /// Service using `window_days` as the default trend lookback
    #[must_use]
    pub const fn new(window_days: u32) -> Self {
        Self {
            estimator: GoalTimelineEstimator::with_window(window_days),
        }
    }

    /// Default trend lookback in days
    #[must_use]
    pub const fn window_days(&self) -> u32 {
        self.estimator.window_days()
    }

    /// Full dashboard summary relative to `as_of`
    #[must_use]
    pub fn summary_at<S: BodyCompositionSource>(
        &self,
        source: &S,
        as_of: DateTime<Utc>,
    ) -> DashboardSummary {
        let latest = source
            .measurements()
            .iter()
            .max_by_key(|m| m.date)
            .cloned();
        let height_cm = source.height_cm();
        let bmi = latest
            .as_ref()
            .and_then(|m| bmi(m.weight, height_cm))
            .map(|value| BodyMassIndex {
                value: round_to(value, 1),
                category: BmiCategory::from_bmi(value),
            });

        let timelines = Metric::ALL
            .iter()
            .map(|&metric| self.timeline_at(source, metric, None, as_of))
            .collect();

        AppLogger::log_insight("summary", None, latest.is_some());
        DashboardSummary {
            as_of,
            latest,
            height_cm,
            bmi,
            progress: Self::progress(source),
            timelines,
            periods: Self::standard_periods_at(source, as_of),
        }
    }

    /// Goal timeline for `metric`, using `window_days` or the default window
    #[must_use]
    pub fn timeline_at<S: BodyCompositionSource>(
        &self,
        source: &S,
        metric: Metric,
        window_days: Option<u32>,
        as_of: DateTime<Utc>,
    ) -> MetricTimeline {
        let estimator = window_days.map_or(self.estimator, GoalTimelineEstimator::with_window);
        let current = source.current_value(metric);
        let goal = source.goals().get(metric);

        let estimate = match current {
            Some(current) => {
                estimator.estimate_at(source.measurements(), metric, current, goal, as_of)
            }
            None => TimelineEstimate::Unavailable(TimelineFailure::InsufficientData),
        };

        MetricTimeline {
            metric,
            current,
            goal,
            window_days: estimator.window_days(),
            estimate,
        }
    }

    /// Raw recency-weighted trend for `metric`
    #[must_use]
    pub fn trend_at<S: BodyCompositionSource>(
        &self,
        source: &S,
        metric: Metric,
        window_days: Option<u32>,
        as_of: DateTime<Utc>,
    ) -> MetricTrend {
        let window_days = window_days.unwrap_or_else(|| self.window_days());
        let trend =
            WeightedTrendAnalyzer::regress_at(source.measurements(), metric, window_days, as_of);
        AppLogger::log_insight("trend", Some(metric.key()), trend.is_some());
        MetricTrend {
            metric,
            window_days,
            trend,
        }
    }

    /// Progress for every metric that has both a goal and a latest value
    #[must_use]
    pub fn progress<S: BodyCompositionSource>(source: &S) -> Vec<GoalProgress> {
        let goals = source.goals();
        let measurements = source.measurements();

        Metric::ALL
            .iter()
            .filter_map(|&metric| {
                let target = goals.get(metric)?;
                let current = source.current_value(metric)?;
                let initial =
                    GoalProgressCalculator::initial_value(measurements, metric).unwrap_or(current);
                Some(GoalProgress {
                    metric,
                    current,
                    target,
                    initial,
                    percent: GoalProgressCalculator::progress_for_metric(
                        current,
                        target,
                        metric,
                        measurements,
                    ),
                })
            })
            .collect()
    }

    /// Changes across every measurement dated on or after `start`
    #[must_use]
    pub fn periods_since<S: BodyCompositionSource>(
        source: &S,
        start: NaiveDate,
    ) -> Option<PeriodInsight> {
        let insight = PeriodInsightCalculator::period_insights(source.measurements(), start);
        AppLogger::log_insight("period", None, insight.is_some());
        insight
    }

    /// The 7, 30 and 90 day windows ending on the day of `as_of`
    #[must_use]
    pub fn standard_periods_at<S: BodyCompositionSource>(
        source: &S,
        as_of: DateTime<Utc>,
    ) -> StandardPeriods {
        PeriodInsightCalculator::standard_periods(source.measurements(), as_of.date_naive())
    }
}
