// ABOUTME: HTTP server assembly and lifecycle for the Bodylog API
// ABOUTME: Merges domain routers, applies tracing and CORS layers, serves until ctrl-c
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::middleware::{create_request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{DataRoutes, HealthRoutes, InsightRoutes};
use anyhow::{Context, Result};
use axum::{body::Body, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The Bodylog HTTP server
pub struct BodylogServer {
    resources: Arc<ServerResources>,
}

impl BodylogServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    pub fn router(resources: &Arc<ServerResources>) -> Router {
        let cors = setup_cors(&resources.config.cors);

        Router::new()
            .merge(HealthRoutes::routes(Arc::clone(resources)))
            .merge(DataRoutes::routes(Arc::clone(resources)))
            .merge(InsightRoutes::routes(Arc::clone(resources)))
            .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
            .layer(cors)
    }

    /// Bind the configured address and serve until ctrl-c
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails.
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until ctrl-c
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let app = Self::router(&self.resources);
        info!(address = %listener.local_addr()?, "HTTP server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for ctrl-c, shutting down");
    }
    info!("Shutdown signal received");
}
