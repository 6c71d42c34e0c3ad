// ABOUTME: Error types for the HTTP server, shared with the core crate
// ABOUTME: Re-exports AppError, ErrorCode and the JSON error envelope from bodylog-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! The error types live in `bodylog-core` so the calculators and the models
//! share them with the server. With the `http-response` feature enabled
//! (the server always enables it) `AppError` converts into an axum response
//! carrying the [`ErrorResponse`] envelope.

pub use bodylog_core::errors::*;
