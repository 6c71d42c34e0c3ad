// ABOUTME: Core data models for the Bodylog tracker
// ABOUTME: Re-exports Measurement, Goals, Metric, and the persisted StoreDocument
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The persisted JSON document and the records inside it. Field names follow
//! the camelCase shape of the on-disk document so the file stays compatible
//! with the web dashboard that reads it.
//!
//! ## Core Models
//!
//! - `Measurement`: a single dated weigh-in (weight, body fat, lean mass)
//! - `Goals`: optional per-metric targets
//! - `Metric`: explicit selector naming which measurement field a computation reads
//! - `StoreDocument`: the whole persisted document

mod document;
mod goals;
mod measurement;
mod metric;

pub use document::StoreDocument;
pub use goals::{Goals, GoalsUpdate};
pub use measurement::{Measurement, MeasurementInput};
pub use metric::Metric;
