// ABOUTME: Composition root holding the store, services and configuration shared by routes
// ABOUTME: Built once at startup and handed to every router through axum state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::services::{DataService, InsightService};
use crate::storage::{DocumentStore, JsonFileStore};
use std::sync::Arc;
use tracing::info;

/// Shared server state
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Document reads and writes
    pub data: DataService,
    /// Insight computation
    pub insights: InsightService,
}

impl ServerResources {
    /// Wire services over an existing store
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, store: Arc<dyn DocumentStore>) -> Self {
        let insights = InsightService::new(config.trend_window_days);
        Self {
            config,
            data: DataService::new(store),
            insights,
        }
    }

    /// Open the JSON file store named by the configuration and wire services over it
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data directory cannot be created.
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let store = JsonFileStore::open(config.data_file.clone()).await?;
        info!(
            data_file = %store.path().display(),
            trend_window_days = config.trend_window_days,
            "Server resources initialized"
        );
        Ok(Self::new(Arc::new(config), Arc::new(store)))
    }
}
