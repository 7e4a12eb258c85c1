//! API route configuration.

use crate::api::handlers::{click_export_handler, click_summary_handler, clicks_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Click log routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /shortio/clicks`         - Recent clicks reformatted for display
/// - `GET /shortio/clicks/summary` - City/path counts over recent clicks
/// - `GET /shortio/clicks/export`  - Recent clicks as a CSV download
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shortio/clicks", get(clicks_handler))
        .route("/shortio/clicks/summary", get(click_summary_handler))
        .route("/shortio/clicks/export", get(click_export_handler))
}
