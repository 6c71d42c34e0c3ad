// ABOUTME: Bodylog HTTP server binary
// ABOUTME: Loads configuration, initializes logging and the JSON store, then serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Bodylog Server Binary
//!
//! Starts the body-composition API over the configured JSON data file.

use anyhow::Result;
use bodylog_server::{
    config::ServerConfig, logging, resources::ServerResources, server::BodylogServer,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "bodylog-server")]
#[command(about = "Bodylog - body-composition tracking API with trend and goal insights")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the JSON data file path
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting Bodylog server");
    info!("{}", config.summary());

    let host = config.host.clone();
    let port = config.http_port;
    let resources = Arc::new(ServerResources::from_config(config).await?);
    let server = BodylogServer::new(resources);

    display_available_endpoints(&host, port);

    if let Err(e) = server.run().await {
        error!("Server error: {e}");
        return Err(e);
    }
    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(host: &str, port: u16) {
    info!("=== Available API Endpoints ===");
    info!("Data:");
    info!("   Document:           GET    http://{host}:{port}/data");
    info!("   Replace Document:   POST   http://{host}:{port}/data");
    info!("   Upsert Measurement: PUT    http://{host}:{port}/measurements");
    info!("   Delete Measurement: DELETE http://{host}:{port}/measurements/{{id}}");
    info!("   Update Goals:       PUT    http://{host}:{port}/goals");
    info!("   Set Height:         PUT    http://{host}:{port}/height");
    info!("Insights:");
    info!("   Summary:            GET    http://{host}:{port}/insights/summary");
    info!("   Goal Timeline:      GET    http://{host}:{port}/insights/timeline?metric={{metric}}");
    info!("   Trend:              GET    http://{host}:{port}/insights/trend?metric={{metric}}");
    info!("   Goal Progress:      GET    http://{host}:{port}/insights/progress");
    info!("   Periods:            GET    http://{host}:{port}/insights/periods?start={{date}}");
    info!("Monitoring:");
    info!("   Health:             GET    http://{host}:{port}/health");
    info!("   Readiness:          GET    http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
