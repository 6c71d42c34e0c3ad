// ABOUTME: Route module organization for the Bodylog HTTP API
// ABOUTME: Groups data, insight and health endpoints into domain routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Bodylog server
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the service layer.

/// Document and edit routes
pub mod data;
/// Health check and readiness routes
pub mod health;
/// Trend, progress, timeline and period routes
pub mod insights;

/// Data route handlers
pub use data::DataRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Insight route handlers
pub use insights::InsightRoutes;
