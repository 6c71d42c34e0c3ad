// ABOUTME: Numeric thresholds for trend fitting, goal forecasting, and insight windows
// ABOUTME: Grouped by calculator so each policy value has a single definition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Trend fitting parameters
pub mod trend_analysis {
    /// Decay constant (days) of the recency weight `exp(-days_ago / k)`
    pub const RECENCY_DECAY_DAYS: f64 = 10.0;

    /// Default lookback window for trend fitting
    pub const DEFAULT_WINDOW_DAYS: u32 = 30;

    /// Minimum number of points needed to fit a line
    pub const MIN_REGRESSION_POINTS: usize = 2;

    /// Milliseconds per day, for fractional day offsets
    pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
}

/// Goal timeline policy
pub mod goal_timeline {
    /// Minimum number of measurements before any forecast is attempted
    pub const MIN_MEASUREMENTS: usize = 2;

    /// Slopes (units/day) below this magnitude are treated as no trend
    pub const MIN_TREND_SLOPE: f64 = 0.001;

    /// Slopes must exceed this magnitude for a goal to be called achievable
    pub const ACHIEVABLE_MIN_SLOPE: f64 = 0.01;

    /// Forecasts further out than this are rejected
    pub const MAX_TIMELINE_DAYS: i64 = 1000;

    /// R² at or above which confidence is high
    pub const HIGH_CONFIDENCE_R_SQUARED: f64 = 0.7;

    /// R² at or above which confidence is medium
    pub const MEDIUM_CONFIDENCE_R_SQUARED: f64 = 0.4;
}

/// Trailing windows for period insights
pub mod insight_periods {
    /// One week
    pub const WEEK_DAYS: u32 = 7;
    /// One month
    pub const MONTH_DAYS: u32 = 30;
    /// One quarter
    pub const QUARTER_DAYS: u32 = 90;
    /// Minimum measurements inside a window to report a change
    pub const MIN_PERIOD_POINTS: usize = 2;
}
