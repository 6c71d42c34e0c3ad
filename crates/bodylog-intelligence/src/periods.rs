// ABOUTME: Raw metric change over trailing or custom date windows
// ABOUTME: Differences the newest and oldest measurement inside each window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::insight_periods::{MIN_PERIOD_POINTS, MONTH_DAYS, QUARTER_DAYS, WEEK_DAYS};
use bodylog_core::models::{Measurement, Metric};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Change across a date window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodInsight {
    /// Weight change in kilograms (newest minus oldest)
    pub weight_change: f64,
    /// Body-fat change in percentage points
    pub body_fat_change: f64,
    /// Lean-mass change in kilograms
    pub lean_mass_change: f64,
    /// Calendar days between the oldest and newest measurement in the window
    pub period_days: i64,
    /// Date of the oldest measurement in the window
    pub from: NaiveDate,
    /// Date of the newest measurement in the window
    pub to: NaiveDate,
}

impl PeriodInsight {
    /// Change of a single metric
    #[must_use]
    pub const fn change(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Weight => self.weight_change,
            Metric::BodyFat => self.body_fat_change,
            Metric::LeanMass => self.lean_mass_change,
        }
    }
}

/// Insights for the standard trailing windows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardPeriods {
    /// Last 7 days
    pub week: Option<PeriodInsight>,
    /// Last 30 days
    pub month: Option<PeriodInsight>,
    /// Last 90 days
    pub quarter: Option<PeriodInsight>,
}

/// Period change calculator
pub struct PeriodInsightCalculator;

impl PeriodInsightCalculator {
    /// Change between the oldest and newest measurement dated on or after `start_date`
    ///
    /// Returns `None` when fewer than two measurements fall in the window.
    #[must_use]
    pub fn period_insights(
        measurements: &[Measurement],
        start_date: NaiveDate,
    ) -> Option<PeriodInsight> {
        let in_window: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| m.date >= start_date)
            .collect();
        if in_window.len() < MIN_PERIOD_POINTS {
            return None;
        }

        let newest = in_window.iter().max_by_key(|m| m.date)?;
        let oldest = in_window.iter().min_by_key(|m| m.date)?;

        Some(PeriodInsight {
            weight_change: newest.weight - oldest.weight,
            body_fat_change: newest.body_fat - oldest.body_fat,
            lean_mass_change: newest.lean_mass - oldest.lean_mass,
            period_days: (newest.date - oldest.date).num_days(),
            from: oldest.date,
            to: newest.date,
        })
    }

    /// Insights for the window of `days` days ending on `today`
    #[must_use]
    pub fn trailing(
        measurements: &[Measurement],
        today: NaiveDate,
        days: u32,
    ) -> Option<PeriodInsight> {
        let start = today.checked_sub_signed(Duration::days(i64::from(days)))?;
        Self::period_insights(measurements, start)
    }

    /// The 7, 30 and 90 day windows ending on `today`
    #[must_use]
    pub fn standard_periods(measurements: &[Measurement], today: NaiveDate) -> StandardPeriods {
        StandardPeriods {
            week: Self::trailing(measurements, today, WEEK_DAYS),
            month: Self::trailing(measurements, today, MONTH_DAYS),
            quarter: Self::trailing(measurements, today, QUARTER_DAYS),
        }
    }
}
