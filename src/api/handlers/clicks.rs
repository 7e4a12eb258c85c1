//! Handlers for Short.io click log endpoints.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::IntoResponse,
};

use crate::api::dto::clicks::{ClickSummaryResponse, ClicksQueryParams, ClicksResponse};
use crate::application::services::click_service::{ClickQuery, ClickSummary};
use crate::domain::click_export::to_csv_bytes;
use crate::error::AppError;
use crate::state::AppState;

/// Returns recent clicks reformatted for display.
///
/// # Endpoint
///
/// `GET /api/shortio/clicks`
///
/// # Query Parameters
///
/// - `tz` (optional): `UTC` or `Asia/Seoul` (default: server default, `UTC`)
/// - `limit` (optional): Number of clicks, 1-100 (default: 30)
/// - `order` (optional): `source` or `latest` (default: `source`)
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "link": "https://app.short.cm/login",
///       "date": "2020-05-20",
///       "time": "15:19:12",
///       "path": "/login",
///       "city": "Mumbai"
///     }
///   ],
///   "count": 1,
///   "timezone": "Asia/Seoul"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` or `order` is invalid.
/// Returns 502 Bad Gateway if the click source fails.
pub async fn clicks_handler(
    State(state): State<AppState>,
    params: Result<Query<ClicksQueryParams>, QueryRejection>,
) -> Result<Json<ClicksResponse>, AppError> {
    let query = resolve_query(&state, params)?;

    let views = state.click_service.recent_clicks(query).await?;

    Ok(Json(ClicksResponse::new(views, query.timezone)))
}

/// Returns how many of the recent clicks have a city and a path.
///
/// # Endpoint
///
/// `GET /api/shortio/clicks/summary`
///
/// Accepts the same query parameters as [`clicks_handler`].
///
/// # Response
///
/// ```json
/// { "success": true, "timezone": "UTC", "total": 5, "with_city": 3, "with_path": 5 }
/// ```
pub async fn click_summary_handler(
    State(state): State<AppState>,
    params: Result<Query<ClicksQueryParams>, QueryRejection>,
) -> Result<Json<ClickSummaryResponse>, AppError> {
    let query = resolve_query(&state, params)?;

    let views = state.click_service.recent_clicks(query).await?;

    Ok(Json(ClickSummaryResponse {
        success: true,
        timezone: query.timezone,
        summary: ClickSummary::from_views(&views),
    }))
}

/// Downloads recent clicks as a CSV file.
///
/// # Endpoint
///
/// `GET /api/shortio/clicks/export`
///
/// Accepts the same query parameters as [`clicks_handler`]. The body starts
/// with a UTF-8 BOM and a `link,date,time,path,city` header row. The file is
/// named `shortio_clicks_<tz>.csv`, e.g. `shortio_clicks_asia_seoul.csv`.
pub async fn click_export_handler(
    State(state): State<AppState>,
    params: Result<Query<ClicksQueryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = resolve_query(&state, params)?;

    let views = state.click_service.recent_clicks(query).await?;
    let body = to_csv_bytes(&views)?;

    let disposition = format!(
        "attachment; filename=\"shortio_clicks_{}.csv\"",
        query.timezone.file_slug()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

fn resolve_query(
    state: &AppState,
    params: Result<Query<ClicksQueryParams>, QueryRejection>,
) -> Result<ClickQuery, AppError> {
    let Query(params) = params?;
    Ok(params.into_query(state.default_timezone, state.default_limit))
}
