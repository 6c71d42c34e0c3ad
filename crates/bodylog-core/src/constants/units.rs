// ABOUTME: Unit conversion factors for mass and length
// ABOUTME: Shared by the conversion helpers and the derived pound fields on measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.204_62;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// BMI below this value is classified as underweight
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;

/// BMI below this value (and at or above underweight) is classified as normal
pub const BMI_NORMAL_BELOW: f64 = 25.0;

/// BMI below this value (and at or above normal) is classified as overweight
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;
