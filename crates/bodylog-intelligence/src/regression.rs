// ABOUTME: Recency-weighted linear regression over a measurement series
// ABOUTME: Closed-form weighted least squares with weighted R² and degenerate-input guards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: day offsets and point counts are small

use crate::constants::trend_analysis::{
    MILLIS_PER_DAY, MIN_REGRESSION_POINTS, RECENCY_DECAY_DAYS,
};
use bodylog_core::models::{Measurement, Metric};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weighted linear regression results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionResult {
    /// Rate of change in metric units per day
    pub slope: f64,
    /// Fitted value at the origin (the oldest point in the window)
    pub intercept: f64,
    /// Weighted coefficient of determination, within [0, 1]
    pub r_squared: f64,
    /// Number of measurements inside the window
    pub data_point_count: usize,
    /// Lookback window the fit was computed over
    pub window_days: u32,
    /// Date of the oldest point in the window (x = 0)
    pub origin: NaiveDate,
}

impl RegressionResult {
    /// Fitted value on a given date
    #[must_use]
    pub fn predict(&self, date: NaiveDate) -> f64 {
        let days = (date - self.origin).num_days() as f64;
        self.slope.mul_add(days, self.intercept)
    }
}

/// A point prepared for fitting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedPoint {
    /// Days since the oldest point in the window
    pub x: f64,
    /// Metric value
    pub y: f64,
    /// Recency weight
    pub weight: f64,
}

/// Line fitted by [`WeightedTrendAnalyzer::weighted_least_squares`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Weighted R², floored at 0
    pub r_squared: f64,
}

/// Trend analyzer that favours recent measurements
///
/// Each point inside the lookback window is weighted by
/// `exp(-days_ago / 10)` where `days_ago` is measured from the reference
/// instant, so a single recent outlier cannot dominate the fit but recent
/// data still counts more than old data.
pub struct WeightedTrendAnalyzer;

impl WeightedTrendAnalyzer {
    /// Fit a trend for `metric` over the last `window_days`, relative to now
    #[must_use]
    pub fn regress(
        measurements: &[Measurement],
        metric: Metric,
        window_days: u32,
    ) -> Option<RegressionResult> {
        Self::regress_at(measurements, metric, window_days, Utc::now())
    }

    /// Fit a trend for `metric` over the `window_days` preceding `as_of`
    ///
    /// Returns `None` when fewer than two measurements fall inside the
    /// window, when every point shares the same date (zero variance in x),
    /// or when the fit is not finite. A window reaching past the earliest
    /// representable instant covers every measurement.
    #[must_use]
    pub fn regress_at(
        measurements: &[Measurement],
        metric: Metric,
        window_days: u32,
        as_of: DateTime<Utc>,
    ) -> Option<RegressionResult> {
        let window_start = as_of.checked_sub_signed(Duration::days(i64::from(window_days)));
        let in_window: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| window_start.map_or(true, |start| m.instant() >= start))
            .collect();

        if in_window.len() < MIN_REGRESSION_POINTS {
            debug!(
                metric = %metric,
                window_days,
                points = in_window.len(),
                "Not enough measurements in window for regression"
            );
            return None;
        }

        let origin = in_window.iter().map(|m| m.date).min()?;
        let origin_instant = origin.and_time(NaiveTime::MIN).and_utc();

        let points: Vec<WeightedPoint> = in_window
            .iter()
            .map(|m| {
                let instant = m.instant();
                let days_ago = fractional_days(as_of - instant);
                WeightedPoint {
                    x: fractional_days(instant - origin_instant),
                    y: m.value(metric),
                    weight: (-days_ago / RECENCY_DECAY_DAYS).exp(),
                }
            })
            .collect();

        let fit = Self::weighted_least_squares(&points)?;

        Some(RegressionResult {
            slope: fit.slope,
            intercept: fit.intercept,
            r_squared: fit.r_squared,
            data_point_count: points.len(),
            window_days,
            origin,
        })
    }

    /// Closed-form weighted least squares
    ///
    /// `slope = (ΣW·Σwxy − Σwx·Σwy) / (ΣW·Σwx² − (Σwx)²)`. Returns `None`
    /// for fewer than two points, zero variance in x, or non-finite output.
    #[must_use]
    pub fn weighted_least_squares(points: &[WeightedPoint]) -> Option<WeightedFit> {
        if points.len() < MIN_REGRESSION_POINTS {
            return None;
        }

        let (mut sum_w, mut sum_wx, mut sum_wy, mut sum_wxy, mut sum_wxx) =
            (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
        for p in points {
            sum_w += p.weight;
            sum_wx += p.weight * p.x;
            sum_wy += p.weight * p.y;
            sum_wxy += p.weight * p.x * p.y;
            sum_wxx += p.weight * p.x * p.x;
        }

        let denominator = sum_w.mul_add(sum_wxx, -(sum_wx * sum_wx));
        if !denominator.is_finite() || denominator.abs() <= f64::EPSILON || sum_w <= 0.0 {
            debug!("Cannot fit regression: zero variance in x");
            return None;
        }

        let slope = sum_w.mul_add(sum_wxy, -(sum_wx * sum_wy)) / denominator;
        let intercept = slope.mul_add(-sum_wx, sum_wy) / sum_w;

        let mean_y = sum_wy / sum_w;
        let (mut ss_res, mut ss_tot) = (0.0_f64, 0.0_f64);
        for p in points {
            let predicted = slope.mul_add(p.x, intercept);
            ss_res += p.weight * (p.y - predicted).powi(2);
            ss_tot += p.weight * (p.y - mean_y).powi(2);
        }

        // A flat series explains nothing; report no fit rather than 0/0.
        let r_squared = if ss_tot <= f64::EPSILON {
            0.0
        } else {
            (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
        };

        if !slope.is_finite() || !intercept.is_finite() || !r_squared.is_finite() {
            return None;
        }

        Some(WeightedFit {
            slope,
            intercept,
            r_squared,
        })
    }
}

fn fractional_days(delta: Duration) -> f64 {
    delta.num_milliseconds() as f64 / MILLIS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_least_squares_exact_line() {
        let points: Vec<WeightedPoint> = (0..5)
            .map(|i| {
                let x = f64::from(i);
                WeightedPoint {
                    x,
                    y: 2.0_f64.mul_add(x, 1.0),
                    weight: 1.0 / (x + 1.0),
                }
            })
            .collect();
        let fit = WeightedTrendAnalyzer::weighted_least_squares(&points).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-9);
        assert!((fit.intercept - 1.0).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_variance_in_x_is_rejected() {
        let points = [
            WeightedPoint {
                x: 0.0,
                y: 70.0,
                weight: 1.0,
            },
            WeightedPoint {
                x: 0.0,
                y: 71.0,
                weight: 0.5,
            },
        ];
        assert!(WeightedTrendAnalyzer::weighted_least_squares(&points).is_none());
    }

    #[test]
    fn test_flat_series_has_zero_r_squared() {
        let points: Vec<WeightedPoint> = (0..4)
            .map(|i| WeightedPoint {
                x: f64::from(i),
                y: 70.0,
                weight: 1.0,
            })
            .collect();
        let fit = WeightedTrendAnalyzer::weighted_least_squares(&points).unwrap();
        assert!(fit.slope.abs() < 1e-12);
        assert!(fit.r_squared.abs() < f64::EPSILON);
    }

    #[test]
    fn test_oversized_window_covers_every_measurement() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 20)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let measurements: Vec<Measurement> = [(1, 80.0), (2, 79.0), (3, 78.0)]
            .into_iter()
            .map(|(month, weight)| {
                let date = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
                Measurement::new(date, weight, 20.0, weight * 0.8)
            })
            .collect();

        let fit =
            WeightedTrendAnalyzer::regress_at(&measurements, Metric::Weight, u32::MAX, as_of)
                .unwrap();
        assert_eq!(fit.data_point_count, 3);
        assert_eq!(fit.window_days, u32::MAX);
    }
}
