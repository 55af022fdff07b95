mod common;

use axum_test::TestServer;
use common::{FakeProvider, create_test_state, sample_report};
use project_tracker::infrastructure::cache::REDIS_BACKEND;
use project_tracker::routes;

#[tokio::test]
async fn test_health_endpoint_success() {
    let ctx = create_test_state(FakeProvider::ok("[]"), Some(Ok(sample_report())));
    let server = TestServer::new(routes::router(ctx.state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["message"], "memory connected");
    assert_eq!(json["checks"]["report_source"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded_without_report_source() {
    let ctx = create_test_state(FakeProvider::ok("[]"), None);
    let server = TestServer::new(routes::router(ctx.state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["report_source"]["status"], "error");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let ctx = create_test_state(FakeProvider::ok("[]"), Some(Ok(sample_report())));
    let server = TestServer::new(routes::router(ctx.state)).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("cache").is_some());
    assert!(json["checks"].get("report_source").is_some());
}

#[tokio::test]
async fn test_health_reports_memory_fallback_when_redis_configured() {
    let ctx = create_test_state(FakeProvider::ok("[]"), Some(Ok(sample_report())));
    let state = ctx.state.with_expected_cache_backend(REDIS_BACKEND);
    let server = TestServer::new(routes::router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["cache"]["status"], "error");
    assert_eq!(
        json["checks"]["cache"]["message"],
        "redis unavailable, using memory fallback"
    );
    assert_eq!(json["checks"]["report_source"]["status"], "ok");
}
