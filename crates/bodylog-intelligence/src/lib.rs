// ABOUTME: Trend and goal intelligence engine for body-composition measurements
// ABOUTME: Pure, synchronous calculators over newest-first measurement slices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bodylog Intelligence
//!
//! Stateless calculators that turn a measurement history into trends and
//! goal forecasts. Every function takes its inputs explicitly (including the
//! metric being analysed and, in the `_at` variants, the reference instant),
//! so results are reproducible and safe to compute from any task.
//!
//! "Not enough data" is never an error here: calculators return `None` or a
//! typed failure reason that callers render as an informational state.

/// Thresholds and windows used by the calculators
pub mod constants;

/// Goal progress percentage
pub mod progress;

/// Change over trailing periods
pub mod periods;

/// Recency-weighted linear regression
pub mod regression;

/// Read-only data source consumed by the calculators
pub mod source;

/// Days-to-goal forecasting
pub mod timeline;

pub use periods::{PeriodInsight, PeriodInsightCalculator, StandardPeriods};
pub use progress::GoalProgressCalculator;
pub use regression::{RegressionResult, WeightedTrendAnalyzer};
pub use source::BodyCompositionSource;
pub use timeline::{
    Confidence, GoalTimelineEstimator, TimelineEstimate, TimelineFailure, TimelineForecast,
};
