// ABOUTME: Insight route handlers exposing trends, goal progress, timelines and periods
// ABOUTME: Read-only endpoints computed from the stored document at request time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight routes
//!
//! Every handler loads the current document and computes the requested view
//! relative to the current time. Missing data never produces an error: the
//! views carry `null` values or a failure reason instead.

use crate::{
    errors::{AppError, ErrorCode},
    resources::ServerResources,
    services::InsightService,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bodylog_core::{constants::limits, models::Metric};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for per-metric insights
#[derive(Debug, Deserialize)]
struct MetricQuery {
    metric: Option<String>,
    window_days: Option<u32>,
}

impl MetricQuery {
    fn metric(&self) -> Result<Metric, AppError> {
        self.metric
            .as_deref()
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::MissingRequiredField,
                    "Query parameter 'metric' is required",
                )
            })?
            .parse()
    }

    fn window_days(&self) -> Result<Option<u32>, AppError> {
        match self.window_days {
            Some(0) => Err(AppError::out_of_range("window_days must be at least 1")),
            Some(days) if days > limits::MAX_WINDOW_DAYS => Err(AppError::out_of_range(format!(
                "window_days must be at most {}",
                limits::MAX_WINDOW_DAYS
            ))),
            other => Ok(other),
        }
    }
}

/// Query parameters for period insights
#[derive(Debug, Deserialize)]
struct PeriodsQuery {
    start: Option<String>,
}

/// Insight routes
pub struct InsightRoutes;

impl InsightRoutes {
    /// Create all insight routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/insights/summary", get(Self::handle_summary))
            .route("/insights/timeline", get(Self::handle_timeline))
            .route("/insights/trend", get(Self::handle_trend))
            .route("/insights/progress", get(Self::handle_progress))
            .route("/insights/periods", get(Self::handle_periods))
            .with_state(resources)
    }

    /// Handle GET /insights/summary
    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let document = resources.data.document().await?;
        let summary = resources.insights.summary_at(&document, Utc::now());
        Ok((StatusCode::OK, Json(summary)).into_response())
    }

    /// Handle GET /insights/timeline?metric=&window_days=
    async fn handle_timeline(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<MetricQuery>,
    ) -> Result<Response, AppError> {
        let metric = query.metric()?;
        let window_days = query.window_days()?;
        let document = resources.data.document().await?;

        let timeline = resources
            .insights
            .timeline_at(&document, metric, window_days, Utc::now());
        Ok((StatusCode::OK, Json(timeline)).into_response())
    }

    /// Handle GET /insights/trend?metric=&window_days=
    async fn handle_trend(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<MetricQuery>,
    ) -> Result<Response, AppError> {
        let metric = query.metric()?;
        let window_days = query.window_days()?;
        let document = resources.data.document().await?;

        let trend = resources
            .insights
            .trend_at(&document, metric, window_days, Utc::now());
        Ok((StatusCode::OK, Json(trend)).into_response())
    }

    /// Handle GET /insights/progress
    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let document = resources.data.document().await?;
        let progress = InsightService::progress(&document);
        Ok((StatusCode::OK, Json(progress)).into_response())
    }

    /// Handle GET /insights/periods?start=YYYY-MM-DD
    ///
    /// With `start`, the change across every measurement on or after that
    /// date (or `null`); without it, the standard 7, 30 and 90 day windows.
    async fn handle_periods(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<PeriodsQuery>,
    ) -> Result<Response, AppError> {
        let document = resources.data.document().await?;

        let Some(start) = query.start.as_deref() else {
            let periods = InsightService::standard_periods_at(&document, Utc::now());
            return Ok((StatusCode::OK, Json(periods)).into_response());
        };

        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").map_err(|e| {
            AppError::invalid_format(format!("Invalid start date '{start}': {e}"))
        })?;
        let insight = InsightService::periods_since(&document, start);
        Ok((StatusCode::OK, Json(insight)).into_response())
    }
}
