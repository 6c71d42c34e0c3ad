// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness at /health and readiness with write queue status at /ready
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use crate::constants::service_names;
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::BODYLOG_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        Json(json!({
            "status": "ready",
            "writeQueue": resources.data.queue_status(),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
