// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides the CORS layer and per-request tracing spans used by the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer construction
pub mod cors;
/// Request spans and request IDs
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use self::tracing::{create_request_span, request_id, REQUEST_ID_HEADER};
