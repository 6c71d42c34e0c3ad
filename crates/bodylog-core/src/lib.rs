// ABOUTME: Core types and constants for the Bodylog body-composition tracker
// ABOUTME: Foundation crate with error handling, data models, unit conversions, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bodylog Core
//!
//! Foundation crate providing shared types and constants for the Bodylog
//! body-composition tracker. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Measurements, goals, metric selectors, and the persisted document
//! - **units**: Pure unit conversion and BMI helpers

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (Measurement, Goals, Metric, `StoreDocument`)
pub mod models;

/// Unit conversion helpers (kg/lbs, cm/inches, BMI)
pub mod units;
