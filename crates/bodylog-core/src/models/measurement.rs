// ABOUTME: Dated body-composition measurement record and its upsert input
// ABOUTME: Handles validation, derived pound fields, and lean-mass derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Metric;
use crate::errors::AppResult;
use crate::units::{kg_to_lbs, round_to};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single dated measurement
///
/// The date is the record's natural key: a document holds at most one
/// measurement per calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Opaque unique identifier
    #[serde(default)]
    pub id: String,
    /// Calendar date of the measurement
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body-fat percentage
    pub body_fat: f64,
    /// Lean mass in kilograms
    pub lean_mass: f64,
    /// Body weight in pounds, derived from `weight`
    #[serde(default)]
    pub weight_lbs: f64,
    /// Lean mass in pounds, derived from `lean_mass`
    #[serde(default)]
    pub lean_mass_lbs: f64,
}

impl Measurement {
    /// Create a measurement with a fresh id and derived fields filled in
    #[must_use]
    pub fn new(date: NaiveDate, weight: f64, body_fat: f64, lean_mass: f64) -> Self {
        let mut measurement = Self {
            id: Uuid::new_v4().to_string(),
            date,
            weight,
            body_fat,
            lean_mass,
            weight_lbs: 0.0,
            lean_mass_lbs: 0.0,
        };
        measurement.refresh_derived();
        measurement
    }

    /// Read the value of a metric
    #[must_use]
    pub const fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Weight => self.weight,
            Metric::BodyFat => self.body_fat,
            Metric::LeanMass => self.lean_mass,
        }
    }

    /// The measurement date as an instant (midnight UTC)
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Recompute the pound fields from the kilogram values
    pub fn refresh_derived(&mut self) {
        self.weight_lbs = round_to(kg_to_lbs(self.weight), 1);
        self.lean_mass_lbs = round_to(kg_to_lbs(self.lean_mass), 1);
    }

    /// Validate every metric value
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for the first metric outside its range.
    pub fn validate(&self) -> AppResult<()> {
        for metric in Metric::ALL {
            metric.validate_value(self.value(metric))?;
        }
        Ok(())
    }
}

/// Payload for creating or updating the measurement of a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementInput {
    /// Calendar date (upsert key)
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body-fat percentage
    pub body_fat: f64,
    /// Lean mass in kilograms; derived from weight and body fat when omitted
    #[serde(default)]
    pub lean_mass: Option<f64>,
}

impl MeasurementInput {
    /// Lean mass as given, or derived as `weight * (1 - body_fat / 100)`
    #[must_use]
    pub fn resolved_lean_mass(&self) -> f64 {
        self.lean_mass
            .unwrap_or_else(|| round_to(self.weight * (1.0 - self.body_fat / 100.0), 2))
    }

    /// Build a validated measurement carrying the given id
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when any value is outside its range.
    pub fn into_measurement(self, id: String) -> AppResult<Measurement> {
        let lean_mass = self.resolved_lean_mass();
        let mut measurement = Measurement {
            id,
            date: self.date,
            weight: self.weight,
            body_fat: self.body_fat,
            lean_mass,
            weight_lbs: 0.0,
            lean_mass_lbs: 0.0,
        };
        measurement.validate()?;
        measurement.refresh_derived();
        Ok(measurement)
    }
}
