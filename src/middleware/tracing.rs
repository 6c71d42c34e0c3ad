// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Creates one span per HTTP request carrying a request ID, method and path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::Request;
use tracing::{info_span, Span};
use uuid::Uuid;

/// Header carrying the caller's request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID from the `x-request-id` header, or a freshly generated one
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(
            || format!("req_{}", Uuid::new_v4().simple()),
            ToOwned::to_owned,
        )
}

/// Span for `TraceLayer::make_span_with`
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    info_span!(
        "http_request",
        request_id = %request_id(request),
        method = %request.method(),
        path = %request.uri().path(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_prefers_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(())
            .unwrap();
        assert_eq!(request_id(&request), "abc-123");
    }

    #[test]
    fn test_request_id_generated_when_missing() {
        let request = Request::builder().body(()).unwrap();
        let id = request_id(&request);
        assert!(id.starts_with("req_"));
        assert_eq!(id.len(), "req_".len() + 32);
    }
}
