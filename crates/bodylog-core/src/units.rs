// ABOUTME: Pure unit conversion helpers for body-composition values
// ABOUTME: Converts kg/lbs and cm/inches and computes BMI with its category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{
    BMI_NORMAL_BELOW, BMI_OVERWEIGHT_BELOW, BMI_UNDERWEIGHT_BELOW, CM_PER_INCH, CM_PER_METER,
    LBS_PER_KG,
};
use serde::{Deserialize, Serialize};

/// Convert kilograms to pounds
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Convert pounds to kilograms
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Convert centimeters to inches
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Convert inches to centimeters
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Round to a fixed number of decimal places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

/// Body mass index from weight in kilograms and height in centimeters
///
/// Returns `None` when either input is non-positive or not finite.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / CM_PER_METER;
    Some(weight_kg / (height_m * height_m))
}

/// WHO adult BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to below 25
    Normal,
    /// BMI 25 to below 30
    Overweight,
    /// BMI 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < BMI_NORMAL_BELOW {
            Self::Normal
        } else if bmi < BMI_OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}
