//! Click source backed by a JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::RawClick;
use crate::domain::sources::{ClickSource, ClickSourceError, ClickSourceResult};

/// Reads raw clicks from a file containing a JSON array, as saved from the
/// provider's `last_clicks` response.
///
/// The file is re-read on every call so it can be replaced while the service
/// runs. Array entries that are not objects still count as (empty) clicks.
pub struct FileClickSource {
    path: PathBuf,
}

impl FileClickSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!("Using FileClickSource ({})", path.display());
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a JSON document holding an array of click records.
    ///
    /// # Errors
    ///
    /// Returns [`ClickSourceError::Json`] if the document is not a JSON array.
    pub fn parse(contents: &str) -> ClickSourceResult<Vec<RawClick>> {
        let entries: Vec<Value> = serde_json::from_str(contents)?;
        Ok(entries.into_iter().map(RawClick::from_value_lossy).collect())
    }
}

#[async_trait]
impl ClickSource for FileClickSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn last_clicks(&self, limit: usize) -> ClickSourceResult<Vec<RawClick>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ClickSourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let mut clicks = Self::parse(&contents)?;
        clicks.truncate(limit);

        debug!(count = clicks.len(), "Loaded clicks from {}", self.path.display());

        Ok(clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_clicks_from_file() {
        let file = write_temp(
            r#"[
                {"url": "https://app.short.cm/login", "dt": "2020-05-20T06:19:12.000Z", "city": "Mumbai"},
                {"url": "https://app.short.cm/settings", "lcpath": "/settings"}
            ]"#,
        );

        let clicks = FileClickSource::new(file.path()).last_clicks(30).await.unwrap();

        assert_eq!(clicks.len(), 2);
        assert_eq!(clicks[0].city.as_deref(), Some("Mumbai"));
        assert_eq!(clicks[1].lcpath.as_deref(), Some("/settings"));
    }

    #[tokio::test]
    async fn test_truncates_to_limit() {
        let file = write_temp(r#"[{"url": "a"}, {"url": "b"}, {"url": "c"}]"#);

        let clicks = FileClickSource::new(file.path()).last_clicks(2).await.unwrap();

        assert_eq!(clicks.len(), 2);
        assert_eq!(clicks[1].url.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileClickSource::new("/nonexistent/clicks.json");
        let err = source.last_clicks(10).await.unwrap_err();

        assert!(matches!(err, ClickSourceError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/clicks.json"));
    }

    #[tokio::test]
    async fn test_not_an_array_is_json_error() {
        let file = write_temp(r#"{"url": "https://example.com"}"#);

        let err = FileClickSource::new(file.path())
            .last_clicks(10)
            .await
            .unwrap_err();

        assert!(matches!(err, ClickSourceError::Json(_)));
    }

    #[test]
    fn test_parse_keeps_non_object_entries() {
        let clicks =
            FileClickSource::parse(r#"[null, 7, {"url": "https://example.com"}]"#).unwrap();

        assert_eq!(clicks.len(), 3);
        assert_eq!(clicks[0], RawClick::default());
        assert_eq!(clicks[2].url.as_deref(), Some("https://example.com"));
    }
}
