//! Click source trait and error types.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::RawClick;

/// Errors that can occur while loading raw clicks.
#[derive(Debug, thiserror::Error)]
pub enum ClickSourceError {
    #[error("Failed to read clicks from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid click data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Click source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for click source operations.
pub type ClickSourceResult<T> = Result<T, ClickSourceError>;

/// Provider of raw click logs.
///
/// Stands in for the provider's "last clicks" statistics call: the result is
/// the most recent clicks, newest first as the provider reports them.
///
/// # Implementations
///
/// - [`crate::infrastructure::sources::SampleClickSource`] - Built-in fixture records
/// - [`crate::infrastructure::sources::FileClickSource`] - JSON array read from disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickSource: Send + Sync {
    /// Short name reported by the health check and logs.
    fn name(&self) -> &'static str;

    /// Returns at most `limit` raw clicks.
    ///
    /// # Errors
    ///
    /// Returns [`ClickSourceError`] if the underlying data cannot be loaded.
    async fn last_clicks(&self, limit: usize) -> ClickSourceResult<Vec<RawClick>>;
}
