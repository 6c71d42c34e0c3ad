// ABOUTME: HTTP tests for the health and readiness endpoints
// ABOUTME: Verifies service identity and the write queue status in the readiness payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let server = TestServer::new().await;

    let response = AxumTestRequest::get("/health").send(server.router()).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "bodylog-server");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_reports_write_queue() {
    let server = TestServer::new().await;
    server.resources.data.set_height(181.0).await.unwrap();

    let body: Value = AxumTestRequest::get("/ready")
        .send(server.router())
        .await
        .json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["writeQueue"]["state"], "idle");
    assert_eq!(body["writeQueue"]["completed"], 1);
    assert_eq!(body["writeQueue"]["failed"], 0);
}

#[tokio::test]
async fn test_request_id_is_accepted() {
    let server = TestServer::new().await;

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "req_test")
        .send(server.router())
        .await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::new().await;
    let response = AxumTestRequest::get("/nope").send(server.router()).await;
    assert_eq!(response.status(), 404);
}
