// ABOUTME: Main library entry point for the Bodylog body-composition server
// ABOUTME: Wires storage, write queue, services and HTTP routes around the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bodylog Server
//!
//! A small HTTP service that stores body-composition measurements (weight,
//! body-fat percentage, lean mass), goals and height in a single JSON file and
//! serves trend, goal-progress, goal-timeline and period insights computed by
//! `bodylog-intelligence`.
//!
//! ## Architecture
//!
//! - **Storage**: whole-document JSON file store; every write goes through a
//!   single-consumer FIFO write queue
//! - **Services**: document edits under one async mutex, insight assembly
//! - **Routes**: thin axum handlers over the services
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bodylog_server::config::ServerConfig;
//! use bodylog_server::resources::ServerResources;
//! use bodylog_server::server::BodylogServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::from_config(config).await?;
//!     BodylogServer::new(Arc::new(resources)).run().await
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Defaults, limits and environment variable names
pub mod constants;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware for CORS and request tracing
pub mod middleware;

/// Composition root shared by every route
pub mod resources;

/// HTTP routes grouped by domain
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;

/// Domain service layer used by the routes
pub mod services;

/// JSON file document store and write queue
pub mod storage;
