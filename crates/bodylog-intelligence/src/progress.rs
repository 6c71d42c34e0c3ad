// ABOUTME: Goal progress percentage relative to the first recorded measurement
// ABOUTME: Separate rules for lower-is-better metrics and target-direction metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bodylog_core::models::{Measurement, Metric};

/// Goal progress calculator
pub struct GoalProgressCalculator;

impl GoalProgressCalculator {
    /// Value of `metric` in the oldest measurement, the progress baseline
    #[must_use]
    pub fn initial_value(measurements: &[Measurement], metric: Metric) -> Option<f64> {
        measurements
            .iter()
            .min_by_key(|m| m.date)
            .map(|m| m.value(metric))
    }

    /// Percentage (0-100) of the way from the initial value to `target`
    ///
    /// The baseline is the oldest measurement's value for `metric`, or
    /// `current` when there is no history. For lower-is-better metrics no
    /// progress is possible when the baseline is already at or below the
    /// target. For other metrics progress is the share of the required change
    /// already covered in the target's direction; a target equal to the
    /// baseline yields 0. Overshooting the target caps at 100 and moving
    /// away from it floors at 0.
    #[must_use]
    pub fn progress(
        current: f64,
        target: f64,
        metric: Metric,
        is_lower_better: bool,
        measurements: &[Measurement],
    ) -> f64 {
        let initial = Self::initial_value(measurements, metric).unwrap_or(current);

        let fraction = if is_lower_better {
            if initial <= target {
                return 0.0;
            }
            (initial - current) / (initial - target)
        } else {
            let total_change = target - initial;
            if total_change.abs() < f64::EPSILON {
                return 0.0;
            }
            (current - initial) / total_change
        };

        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0) * 100.0
        } else {
            0.0
        }
    }

    /// Progress using the metric's own polarity
    #[must_use]
    pub fn progress_for_metric(
        current: f64,
        target: f64,
        metric: Metric,
        measurements: &[Measurement],
    ) -> f64 {
        Self::progress(
            current,
            target,
            metric,
            metric.is_lower_better(),
            measurements,
        )
    }
}
