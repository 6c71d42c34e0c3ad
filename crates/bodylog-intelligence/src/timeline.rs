// ABOUTME: Days-to-goal forecasting from the recency-weighted measurement trend
// ABOUTME: Ordered guard chain yielding either a forecast or a single failure reason
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_possible_truncation)] // Safe: day counts are bounded by MAX_TIMELINE_DAYS

use crate::constants::goal_timeline::{
    ACHIEVABLE_MIN_SLOPE, HIGH_CONFIDENCE_R_SQUARED, MAX_TIMELINE_DAYS, MEDIUM_CONFIDENCE_R_SQUARED,
    MIN_MEASUREMENTS, MIN_TREND_SLOPE,
};
use crate::constants::trend_analysis::DEFAULT_WINDOW_DAYS;
use crate::regression::WeightedTrendAnalyzer;
use bodylog_core::models::{Measurement, Metric};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Why no forecast could be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineFailure {
    /// Fewer than two measurements recorded
    InsufficientData,
    /// No goal set for the metric
    NoGoal,
    /// The current value already equals the goal
    GoalAchieved,
    /// No usable trend inside the window
    TrendTooWeak,
    /// The trend points away from the goal
    InvalidTimeline,
    /// The goal is more than 1000 days out at the current rate
    TimelineTooLong,
}

impl TimelineFailure {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientData => "insufficient_data",
            Self::NoGoal => "no_goal",
            Self::GoalAchieved => "goal_achieved",
            Self::TrendTooWeak => "trend_too_weak",
            Self::InvalidTimeline => "invalid_timeline",
            Self::TimelineTooLong => "timeline_too_long",
        }
    }
}

impl fmt::Display for TimelineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative confidence derived from the trend's R²
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// R² below 0.4
    Low,
    /// R² from 0.4 to below 0.7
    Medium,
    /// R² of 0.7 or more
    High,
}

impl Confidence {
    /// Bucket an R² value
    #[must_use]
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared >= HIGH_CONFIDENCE_R_SQUARED {
            Self::High
        } else if r_squared >= MEDIUM_CONFIDENCE_R_SQUARED {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// A successful forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineForecast {
    /// Whole days until the goal is reached at the current rate
    pub days_to_goal: i64,
    /// Date the goal is reached
    pub target_date: NaiveDate,
    /// Confidence in the trend
    pub confidence: Confidence,
    /// Current rate of change (units per day)
    pub daily_rate: f64,
    /// Whether the trend moves toward the goal fast enough to matter
    pub achievable: bool,
    /// R² of the underlying trend
    pub r_squared: f64,
}

/// Forecast outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEstimate {
    /// A forecast was produced
    Estimated(TimelineForecast),
    /// No forecast, for the given reason
    Unavailable(TimelineFailure),
}

impl TimelineEstimate {
    /// Whether a forecast was produced
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Estimated(_))
    }

    /// The forecast, if any
    #[must_use]
    pub const fn forecast(&self) -> Option<&TimelineForecast> {
        match self {
            Self::Estimated(forecast) => Some(forecast),
            Self::Unavailable(_) => None,
        }
    }

    /// The failure reason, if any
    #[must_use]
    pub const fn failure(&self) -> Option<TimelineFailure> {
        match self {
            Self::Estimated(_) => None,
            Self::Unavailable(reason) => Some(*reason),
        }
    }
}

/// Wire shape: `{"success": true, ...forecast}` or `{"success": false, "reason": ...}`
#[derive(Serialize)]
struct TimelineEstimateView<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<TimelineFailure>,
    #[serde(flatten)]
    forecast: Option<&'a TimelineForecast>,
}

impl Serialize for TimelineEstimate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        TimelineEstimateView {
            success: self.is_success(),
            reason: self.failure(),
            forecast: self.forecast(),
        }
        .serialize(serializer)
    }
}

/// Forecasts when a goal will be reached
#[derive(Debug, Clone, Copy)]
pub struct GoalTimelineEstimator {
    window_days: u32,
}

impl Default for GoalTimelineEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalTimelineEstimator {
    /// Estimator using the default 30-day window
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Estimator using a custom lookback window
    #[must_use]
    pub const fn with_window(window_days: u32) -> Self {
        Self { window_days }
    }

    /// Lookback window used for trend fitting
    #[must_use]
    pub const fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Forecast relative to now
    #[must_use]
    pub fn estimate(
        &self,
        measurements: &[Measurement],
        metric: Metric,
        current: f64,
        goal: Option<f64>,
    ) -> TimelineEstimate {
        self.estimate_at(measurements, metric, current, goal, Utc::now())
    }

    /// Forecast relative to `as_of`
    ///
    /// Guards are checked in a fixed order and the first one that fails
    /// decides the reason: history size, goal presence, goal reached, trend
    /// strength, trend direction, horizon.
    #[must_use]
    pub fn estimate_at(
        &self,
        measurements: &[Measurement],
        metric: Metric,
        current: f64,
        goal: Option<f64>,
        as_of: DateTime<Utc>,
    ) -> TimelineEstimate {
        if measurements.len() < MIN_MEASUREMENTS {
            return TimelineEstimate::Unavailable(TimelineFailure::InsufficientData);
        }

        let Some(goal) = goal else {
            return TimelineEstimate::Unavailable(TimelineFailure::NoGoal);
        };

        let remaining = goal - current;
        if remaining.abs() < f64::EPSILON {
            return TimelineEstimate::Unavailable(TimelineFailure::GoalAchieved);
        }

        let regression =
            WeightedTrendAnalyzer::regress_at(measurements, metric, self.window_days, as_of);
        let Some(regression) = regression.filter(|r| r.slope.abs() >= MIN_TREND_SLOPE) else {
            return TimelineEstimate::Unavailable(TimelineFailure::TrendTooWeak);
        };

        let days = (remaining / regression.slope).ceil();
        if days <= 0.0 {
            return TimelineEstimate::Unavailable(TimelineFailure::InvalidTimeline);
        }
        if days > MAX_TIMELINE_DAYS as f64 {
            return TimelineEstimate::Unavailable(TimelineFailure::TimelineTooLong);
        }

        let days_to_goal = days as i64;
        let Some(target_date) = as_of
            .date_naive()
            .checked_add_signed(Duration::days(days_to_goal))
        else {
            return TimelineEstimate::Unavailable(TimelineFailure::TimelineTooLong);
        };

        let moving_toward_goal = remaining.signum() == regression.slope.signum();
        let achievable = moving_toward_goal && regression.slope.abs() > ACHIEVABLE_MIN_SLOPE;

        debug!(
            metric = %metric,
            days_to_goal,
            slope = regression.slope,
            r_squared = regression.r_squared,
            "Goal timeline estimated"
        );

        TimelineEstimate::Estimated(TimelineForecast {
            days_to_goal,
            target_date,
            confidence: Confidence::from_r_squared(regression.r_squared),
            daily_rate: regression.slope,
            achievable,
            r_squared: regression.r_squared,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_buckets() {
        assert_eq!(Confidence::from_r_squared(0.7), Confidence::High);
        assert_eq!(Confidence::from_r_squared(0.69), Confidence::Medium);
        assert_eq!(Confidence::from_r_squared(0.4), Confidence::Medium);
        assert_eq!(Confidence::from_r_squared(0.39), Confidence::Low);
    }

    #[test]
    fn test_failure_wire_shape() {
        let estimate = TimelineEstimate::Unavailable(TimelineFailure::NoGoal);
        let json = serde_json::to_value(estimate).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "reason": "no_goal" }));
    }

    #[test]
    fn test_success_wire_shape() {
        let estimate = TimelineEstimate::Estimated(TimelineForecast {
            days_to_goal: 10,
            target_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            confidence: Confidence::High,
            daily_rate: 0.5,
            achievable: true,
            r_squared: 1.0,
        });
        let json = serde_json::to_value(estimate).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["daysToGoal"], 10);
        assert_eq!(json["targetDate"], "2025-07-01");
        assert_eq!(json["confidence"], "high");
        assert!(json.get("reason").is_none());
    }
}
