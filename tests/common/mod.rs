#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use axum::{Router, routing::get};
use shortio_clicks::api::handlers::{click_export_handler, click_summary_handler, clicks_handler};
use shortio_clicks::infrastructure::sources::{FileClickSource, SampleClickSource};
use shortio_clicks::state::AppState;
use tempfile::NamedTempFile;

/// State backed by the built-in sample records.
pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(SampleClickSource::new()))
}

/// State backed by a JSON click file.
pub fn create_file_state(path: impl AsRef<Path>) -> AppState {
    AppState::new(Arc::new(FileClickSource::new(path.as_ref())))
}

/// Writes raw click JSON to a temporary file that lives as long as the handle.
pub fn write_clicks_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Router exposing the click endpoints at their production paths.
pub fn clicks_router(state: AppState) -> Router {
    Router::new()
        .route("/api/shortio/clicks", get(clicks_handler))
        .route("/api/shortio/clicks/summary", get(click_summary_handler))
        .route("/api/shortio/clicks/export", get(click_export_handler))
        .with_state(state)
}
