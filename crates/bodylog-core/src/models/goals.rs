// ABOUTME: Per-metric goal targets and the shallow-merge update applied by the goal form
// ABOUTME: Distinguishes an omitted field (keep) from an explicit null (clear)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Metric;
use crate::errors::AppResult;
use serde::{Deserialize, Deserializer, Serialize};

/// Goal targets, each independently optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    /// Target weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// Target body-fat percentage
    #[serde(default)]
    pub body_fat: Option<f64>,
    /// Target lean mass in kilograms
    #[serde(default)]
    pub lean_mass: Option<f64>,
}

impl Goals {
    /// Goal for a metric, if set
    #[must_use]
    pub const fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Weight => self.weight,
            Metric::BodyFat => self.body_fat,
            Metric::LeanMass => self.lean_mass,
        }
    }

    /// Set or clear the goal for a metric
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        match metric {
            Metric::Weight => self.weight = value,
            Metric::BodyFat => self.body_fat = value,
            Metric::LeanMass => self.lean_mass = value,
        }
    }

    /// Validate every goal that is set
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for the first goal outside its metric's range.
    pub fn validate(&self) -> AppResult<()> {
        for metric in Metric::ALL {
            if let Some(value) = self.get(metric) {
                metric.validate_value(value)?;
            }
        }
        Ok(())
    }

    /// Apply a partial update; fields absent from the update are kept
    pub fn merge(&mut self, update: &GoalsUpdate) {
        for metric in Metric::ALL {
            if let Some(value) = update.get(metric) {
                self.set(metric, value);
            }
        }
    }
}

/// Partial goal update
///
/// Outer `None` means "field not present, keep the current goal"; `Some(None)`
/// means "explicit null, clear the goal".
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsUpdate {
    /// Weight goal change
    #[serde(default, deserialize_with = "present")]
    pub weight: Option<Option<f64>>,
    /// Body-fat goal change
    #[serde(default, deserialize_with = "present")]
    pub body_fat: Option<Option<f64>>,
    /// Lean-mass goal change
    #[serde(default, deserialize_with = "present")]
    pub lean_mass: Option<Option<f64>>,
}

impl GoalsUpdate {
    /// Requested change for a metric
    #[must_use]
    pub const fn get(&self, metric: Metric) -> Option<Option<f64>> {
        match metric {
            Metric::Weight => self.weight,
            Metric::BodyFat => self.body_fat,
            Metric::LeanMass => self.lean_mass,
        }
    }
}

// Only invoked when the key is present, so a JSON null becomes `Some(None)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}
