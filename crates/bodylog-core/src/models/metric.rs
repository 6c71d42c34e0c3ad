// ABOUTME: Metric selector naming which body-composition field a computation reads
// ABOUTME: Carries JSON key, unit, default polarity, and per-metric validation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::{MAX_BODY_FAT_PCT, MAX_WEIGHT_KG, MIN_BODY_FAT_PCT};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tracked body-composition metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Body weight in kilograms
    Weight,
    /// Body-fat percentage
    #[serde(alias = "body_fat")]
    BodyFat,
    /// Lean mass in kilograms
    #[serde(alias = "lean_mass")]
    LeanMass,
}

impl Metric {
    /// Every metric, in display order
    pub const ALL: [Self; 3] = [Self::Weight, Self::BodyFat, Self::LeanMass];

    /// JSON key of this metric in measurements and goals
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::BodyFat => "bodyFat",
            Self::LeanMass => "leanMass",
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight | Self::LeanMass => "kg",
            Self::BodyFat => "%",
        }
    }

    /// Whether progress on this metric means the value going down
    ///
    /// Only body fat has a fixed polarity; weight and lean mass goals can
    /// point either way and are judged by their target direction.
    #[must_use]
    pub const fn is_lower_better(self) -> bool {
        matches!(self, Self::BodyFat)
    }

    /// Validate a value recorded or targeted for this metric
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the value is not finite or outside the
    /// metric's accepted range.
    pub fn validate_value(self, value: f64) -> AppResult<()> {
        if !value.is_finite() {
            return Err(AppError::out_of_range(format!(
                "{} must be a finite number",
                self.key()
            )));
        }
        match self {
            Self::Weight | Self::LeanMass => {
                if value <= 0.0 || value > MAX_WEIGHT_KG {
                    return Err(AppError::out_of_range(format!(
                        "{} must be greater than 0 and at most {MAX_WEIGHT_KG} kg, got {value}",
                        self.key()
                    )));
                }
            }
            Self::BodyFat => {
                if !(MIN_BODY_FAT_PCT..=MAX_BODY_FAT_PCT).contains(&value) {
                    return Err(AppError::out_of_range(format!(
                        "bodyFat must be within {MIN_BODY_FAT_PCT}-{MAX_BODY_FAT_PCT}%, got {value}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "weight" => Ok(Self::Weight),
            "bodyFat" | "body_fat" | "bodyfat" => Ok(Self::BodyFat),
            "leanMass" | "lean_mass" | "leanmass" => Ok(Self::LeanMass),
            other => Err(AppError::invalid_input(format!(
                "Unknown metric '{other}', expected one of weight, bodyFat, leanMass"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric_names() {
        assert_eq!("weight".parse::<Metric>().unwrap(), Metric::Weight);
        assert_eq!("body_fat".parse::<Metric>().unwrap(), Metric::BodyFat);
        assert_eq!("leanMass".parse::<Metric>().unwrap(), Metric::LeanMass);
        assert!("height".parse::<Metric>().is_err());
    }

    #[test]
    fn test_only_body_fat_is_lower_better() {
        assert!(Metric::BodyFat.is_lower_better());
        assert!(!Metric::Weight.is_lower_better());
        assert!(!Metric::LeanMass.is_lower_better());
    }

    #[test]
    fn test_validate_value() {
        assert!(Metric::Weight.validate_value(72.5).is_ok());
        assert!(Metric::Weight.validate_value(0.0).is_err());
        assert!(Metric::BodyFat.validate_value(0.0).is_ok());
        assert!(Metric::BodyFat.validate_value(100.1).is_err());
        assert!(Metric::LeanMass.validate_value(f64::NAN).is_err());
    }

    #[test]
    fn test_serde_uses_document_keys() {
        let json = serde_json::to_string(&Metric::LeanMass).unwrap();
        assert_eq!(json, "\"leanMass\"");
        let parsed: Metric = serde_json::from_str("\"body_fat\"").unwrap();
        assert_eq!(parsed, Metric::BodyFat);
    }
}
