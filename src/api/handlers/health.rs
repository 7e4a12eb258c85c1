//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Click source readable
/// - **503 Service Unavailable**: Click source failing
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "click_source": {
///       "status": "ok",
///       "message": "Source: sample"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let source_check = check_click_source(&state).await;
    let healthy = source_check.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            click_source: source_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the configured click source can be read.
async fn check_click_source(state: &AppState) -> CheckStatus {
    let name = state.click_service.source_name();

    match state.click_service.probe().await {
        Ok(()) => CheckStatus::ok(format!("Source: {}", name)),
        Err(e) => CheckStatus::error(format!("Source {} failed: {}", name, e)),
    }
}
