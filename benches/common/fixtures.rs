// ABOUTME: Benchmark fixtures generating deterministic body-composition histories
// ABOUTME: Daily series with a slow downward trend and small periodic noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for reproducible measurement series.

use bodylog_core::models::{Measurement, StoreDocument};
use chrono::{Duration, NaiveDate};

/// Predefined history lengths
#[derive(Debug, Clone, Copy)]
pub enum SeriesSize {
    /// One month of daily weigh-ins
    Month,
    /// One year of daily weigh-ins
    Year,
    /// Several years of daily weigh-ins
    Archive,
}

impl SeriesSize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Year => 365,
            Self::Archive => 2000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
            Self::Archive => "archive",
        }
    }
}

/// Reference date every series ends on
#[must_use]
pub fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 20).unwrap_or_default()
}

/// Daily measurements ending on [`anchor`], newest-first
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn daily_series(size: SeriesSize) -> Vec<Measurement> {
    let end = anchor();
    (0..size.days())
        .map(|days_ago| {
            let noise = ((days_ago * 37) % 11) as f64 / 20.0 - 0.25;
            let weight = (days_ago as f64).mul_add(0.02, 78.0) + noise;
            let body_fat = (days_ago as f64).mul_add(0.01, 18.0);
            let lean_mass = weight * (1.0 - body_fat / 100.0);
            Measurement::new(
                end - Duration::days(days_ago as i64),
                weight,
                body_fat,
                lean_mass,
            )
        })
        .collect()
}

/// A document over [`daily_series`] with goals on every metric
#[must_use]
pub fn document(size: SeriesSize) -> StoreDocument {
    let mut document = StoreDocument {
        measurements: daily_series(size),
        ..StoreDocument::default()
    };
    document.goals.weight = Some(72.0);
    document.goals.body_fat = Some(15.0);
    document.goals.lean_mass = Some(66.0);
    document
}
