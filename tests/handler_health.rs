mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use shortio_clicks::api::handlers::health_handler;
use shortio_clicks::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = server(common::create_test_state()).get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["click_source"]["status"], "ok");
    assert_eq!(json["checks"]["click_source"]["message"], "Source: sample");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let json = server(common::create_test_state())
        .get("/health")
        .await
        .json::<Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("click_source").is_some());
}

#[tokio::test]
async fn test_health_file_source_ok() {
    let file = common::write_clicks_file("[]");

    let response = server(common::create_file_state(file.path()))
        .get("/health")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["checks"]["click_source"]["message"],
        "Source: file"
    );
}

#[tokio::test]
async fn test_health_degraded_when_file_missing() {
    let response = server(common::create_file_state("/nonexistent/last_clicks.json"))
        .get("/health")
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["click_source"]["status"], "error");
}
