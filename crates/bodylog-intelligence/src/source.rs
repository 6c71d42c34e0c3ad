// ABOUTME: Read-only data source trait consumed by the insight calculators
// ABOUTME: Implemented by the persisted StoreDocument snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bodylog_core::models::{Goals, Measurement, Metric, StoreDocument};

/// Anything that can hand the calculators a measurement history
///
/// Implementors expose measurements newest-first with at most one record per
/// date. The calculators never mutate the source.
pub trait BodyCompositionSource {
    /// Measurements, newest first
    fn measurements(&self) -> &[Measurement];

    /// Goal targets
    fn goals(&self) -> Goals;

    /// Height in centimeters
    fn height_cm(&self) -> f64;

    /// Value of a metric in the most recent measurement
    fn current_value(&self, metric: Metric) -> Option<f64> {
        self.measurements()
            .iter()
            .max_by_key(|m| m.date)
            .map(|m| m.value(metric))
    }
}

impl BodyCompositionSource for StoreDocument {
    fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    fn goals(&self) -> Goals {
        self.goals
    }

    fn height_cm(&self) -> f64 {
        self.height
    }
}
