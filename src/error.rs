use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::sources::ClickSourceError;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: &'static str,
    message: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::Upstream { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::Validation { message } => {
                (StatusCode::BAD_REQUEST, "Invalid request parameters", message)
            }
            AppError::Upstream { message } => {
                (StatusCode::BAD_GATEWAY, "Failed to fetch clicks data", message)
            }
            AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process clicks data",
                message,
            ),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}: {}", error, message);
        }

        let body = ErrorBody {
            success: false,
            error,
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClickSourceError> for AppError {
    fn from(e: ClickSourceError) -> Self {
        AppError::upstream(e.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::bad_request(e.body_text())
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::internal(format!("CSV export failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_response() {
        let response = AppError::bad_request("limit must be between 1 and 100").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid request parameters");
        assert_eq!(json["message"], "limit must be between 1 and 100");
    }

    #[tokio::test]
    async fn test_internal_response() {
        let response = AppError::internal("boom").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to process clicks data");
        assert_eq!(json["message"], "boom");
    }

    #[test]
    fn test_click_source_error_maps_to_upstream() {
        let err: AppError = ClickSourceError::Io {
            path: PathBuf::from("/data/clicks.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
        .into();

        assert!(matches!(err, AppError::Upstream { .. }));
        assert!(err.message().contains("/data/clicks.json"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
