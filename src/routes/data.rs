// ABOUTME: Data route handlers for reading and editing the stored document
// ABOUTME: Whole-document GET/POST plus measurement, goal and height edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data routes
//!
//! `GET /data` returns the document exactly as stored. Every write goes
//! through the data service and therefore through the write queue.

use crate::{errors::AppError, resources::ServerResources};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use bodylog_core::models::{GoalsUpdate, MeasurementInput, StoreDocument};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Acknowledgement returned by `POST /data`
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Always `"ok"`
    pub status: String,
}

/// Body of `PUT /height`
#[derive(Debug, Serialize, Deserialize)]
pub struct HeightBody {
    /// Height in centimeters
    pub height: f64,
}

/// Data routes
pub struct DataRoutes;

impl DataRoutes {
    /// Create all data routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/data",
                get(Self::handle_get_document).post(Self::handle_replace_document),
            )
            .route("/measurements", put(Self::handle_upsert_measurement))
            .route("/measurements/:id", delete(Self::handle_delete_measurement))
            .route("/goals", put(Self::handle_update_goals))
            .route("/height", put(Self::handle_set_height))
            .with_state(resources)
    }

    /// Handle GET /data
    async fn handle_get_document(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let document = resources.data.document().await?;
        Ok((StatusCode::OK, Json(document)).into_response())
    }

    /// Handle POST /data - replace the whole document
    async fn handle_replace_document(
        State(resources): State<Arc<ServerResources>>,
        Json(document): Json<StoreDocument>,
    ) -> Result<Response, AppError> {
        resources.data.replace(document).await?;
        let response = SaveResponse {
            status: "ok".to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /measurements - insert or update by date
    async fn handle_upsert_measurement(
        State(resources): State<Arc<ServerResources>>,
        Json(input): Json<MeasurementInput>,
    ) -> Result<Response, AppError> {
        let measurement = resources.data.upsert_measurement(input).await?;
        Ok((StatusCode::OK, Json(measurement)).into_response())
    }

    /// Handle DELETE /measurements/:id
    async fn handle_delete_measurement(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        resources.data.delete_measurement(&id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle PUT /goals - shallow merge
    async fn handle_update_goals(
        State(resources): State<Arc<ServerResources>>,
        Json(update): Json<GoalsUpdate>,
    ) -> Result<Response, AppError> {
        let goals = resources.data.merge_goals(&update).await?;
        Ok((StatusCode::OK, Json(goals)).into_response())
    }

    /// Handle PUT /height
    async fn handle_set_height(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<HeightBody>,
    ) -> Result<Response, AppError> {
        let height = resources.data.set_height(body.height).await?;
        Ok((StatusCode::OK, Json(HeightBody { height })).into_response())
    }
}
