// ABOUTME: Measurement fixtures and server wiring shared by integration tests
// ABOUTME: Builds dated series, fixed instants and a router over a temp-dir JSON store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::Router;
use bodylog_core::models::{Measurement, StoreDocument};
use bodylog_server::config::ServerConfig;
use bodylog_server::resources::ServerResources;
use bodylog_server::server::BodylogServer;
use bodylog_server::storage::JsonFileStore;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Parse a `YYYY-MM-DD` date
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Midnight UTC of a date
pub fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Today's UTC date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// A measurement with lean mass derived from weight and body fat
pub fn measurement(day: NaiveDate, weight: f64, body_fat: f64) -> Measurement {
    Measurement::new(day, weight, body_fat, weight * (1.0 - body_fat / 100.0))
}

/// Weight-only series relative to `anchor`: `(days_before_anchor, weight)`
pub fn weight_series(anchor: NaiveDate, points: &[(i64, f64)]) -> Vec<Measurement> {
    let mut series: Vec<Measurement> = points
        .iter()
        .map(|&(days, weight)| measurement(anchor - Duration::days(days), weight, 20.0))
        .collect();
    series.sort_by(|a, b| b.date.cmp(&a.date));
    series
}

/// A normalized document holding `measurements`
pub fn document(measurements: Vec<Measurement>) -> StoreDocument {
    let mut document = StoreDocument {
        measurements,
        ..StoreDocument::default()
    };
    document.normalize();
    document
}

/// A test server over a JSON file inside a fresh temp directory
pub struct TestServer {
    pub dir: TempDir,
    pub data_file: PathBuf,
    pub resources: Arc<ServerResources>,
}

impl TestServer {
    /// Start with no data file
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let data_file = dir.path().join("bodylog.json");
        let config = ServerConfig {
            data_file: data_file.clone(),
            ..ServerConfig::default()
        };
        let store = JsonFileStore::open(data_file.clone())
            .await
            .expect("open store");
        let resources = Arc::new(ServerResources::new(Arc::new(config), Arc::new(store)));
        Self {
            dir,
            data_file,
            resources,
        }
    }

    /// Start with `document` already persisted
    pub async fn with_document(document: &StoreDocument) -> Self {
        let server = Self::new().await;
        server
            .resources
            .data
            .replace(document.clone())
            .await
            .expect("seed document");
        server
    }

    /// The full application router
    pub fn router(&self) -> Router {
        BodylogServer::router(&self.resources)
    }

    /// Parse the data file as currently on disk
    pub fn read_file(&self) -> StoreDocument {
        let raw = fs::read(&self.data_file).expect("data file exists");
        serde_json::from_slice(&raw).expect("data file is a valid document")
    }
}
