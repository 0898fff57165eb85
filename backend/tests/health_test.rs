//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_ping_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/ping").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Pong");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
    assert!(body.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/metrics").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
