// ABOUTME: The persisted JSON document holding measurements, goals, and height
// ABOUTME: Whole-document operations: normalize, validate, upsert-by-date, delete-by-id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Goals, GoalsUpdate, Measurement, MeasurementInput};
use crate::constants::defaults::DEFAULT_HEIGHT_CM;
use crate::constants::limits::MAX_HEIGHT_CM;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// The whole persisted document
///
/// Storage has whole-document read/replace semantics: callers load the
/// document, change it in memory, and hand the full document back to the
/// write queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreDocument {
    /// Measurements ordered newest-first, unique per date
    pub measurements: Vec<Measurement>,
    /// Goal targets
    pub goals: Goals,
    /// Height in centimeters
    pub height: f64,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            measurements: Vec::new(),
            goals: Goals::default(),
            height: DEFAULT_HEIGHT_CM,
        }
    }
}

impl StoreDocument {
    /// Restore the document invariants
    ///
    /// Sorts measurements newest-first, collapses duplicate dates (the entry
    /// appearing last wins), assigns ids to records missing one, and
    /// recomputes derived pound fields.
    pub fn normalize(&mut self) {
        let before = self.measurements.len();
        let mut by_date: BTreeMap<NaiveDate, Measurement> = BTreeMap::new();
        for mut measurement in self.measurements.drain(..) {
            if measurement.id.is_empty() {
                measurement.id = Uuid::new_v4().to_string();
            }
            measurement.refresh_derived();
            by_date.insert(measurement.date, measurement);
        }
        self.measurements = by_date.into_values().rev().collect();

        let collapsed = before - self.measurements.len();
        if collapsed > 0 {
            debug!(collapsed, "Collapsed measurements sharing a date");
        }
    }

    /// Validate every measurement, the goals, and the height
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` describing the first invalid value.
    pub fn validate(&self) -> AppResult<()> {
        for measurement in &self.measurements {
            measurement.validate().map_err(|e| {
                e.with_details(serde_json::json!({ "date": measurement.date.to_string() }))
            })?;
        }
        self.goals.validate()?;
        validate_height(self.height)
    }

    /// Most recent measurement
    #[must_use]
    pub fn latest(&self) -> Option<&Measurement> {
        self.measurements.iter().max_by_key(|m| m.date)
    }

    /// Insert a measurement, or update the one already recorded for its date
    ///
    /// An update keeps the existing id. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the input is invalid; the document is
    /// left untouched in that case.
    pub fn upsert_measurement(&mut self, input: MeasurementInput) -> AppResult<Measurement> {
        let existing = self.measurements.iter().position(|m| m.date == input.date);
        let id = existing.map_or_else(
            || Uuid::new_v4().to_string(),
            |index| self.measurements[index].id.clone(),
        );
        let measurement = input.into_measurement(id)?;

        match existing {
            Some(index) => self.measurements[index] = measurement.clone(),
            None => {
                let position = self
                    .measurements
                    .iter()
                    .position(|m| m.date < measurement.date)
                    .unwrap_or(self.measurements.len());
                self.measurements.insert(position, measurement.clone());
            }
        }
        Ok(measurement)
    }

    /// Remove the measurement with the given id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no measurement has that id.
    pub fn delete_measurement(&mut self, id: &str) -> AppResult<Measurement> {
        let index = self
            .measurements
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::not_found(format!("Measurement {id}")))?;
        Ok(self.measurements.remove(index))
    }

    /// Shallow-merge a goal update
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when a resulting goal is invalid; the
    /// current goals are kept in that case.
    pub fn merge_goals(&mut self, update: &GoalsUpdate) -> AppResult<Goals> {
        let mut merged = self.goals;
        merged.merge(update);
        merged.validate()?;
        self.goals = merged;
        Ok(merged)
    }

    /// Record the user's height
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the height is not a plausible positive value.
    pub fn set_height(&mut self, height_cm: f64) -> AppResult<()> {
        validate_height(height_cm)?;
        self.height = height_cm;
        Ok(())
    }
}

fn validate_height(height_cm: f64) -> AppResult<()> {
    if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > MAX_HEIGHT_CM {
        return Err(AppError::out_of_range(format!(
            "height must be greater than 0 and at most {MAX_HEIGHT_CM} cm, got {height_cm}"
        )));
    }
    Ok(())
}
