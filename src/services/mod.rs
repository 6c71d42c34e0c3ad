// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Document mutations through the write queue and read-only insight computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they parse the request, call a service, and
//! serialize the result. Services own the business rules so they can be
//! exercised directly in tests without HTTP.

/// Document reads and serialized read-modify-write edits
pub mod data;

/// Dashboard insights computed from the stored document
pub mod insights;

pub use data::DataService;
pub use insights::{
    BodyMassIndex, DashboardSummary, GoalProgress, InsightService, MetricTimeline, MetricTrend,
};
