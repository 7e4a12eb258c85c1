//! Click log retrieval and formatting service.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::click_mapper::map_clicks;
use crate::domain::click_order::ClickOrder;
use crate::domain::entities::ClickView;
use crate::domain::sources::ClickSource;
use crate::domain::timezone::DisplayTimezone;
use crate::error::AppError;

/// Default number of clicks requested from the source.
pub const DEFAULT_LIMIT: usize = 30;

/// Largest number of clicks a single request may ask for.
pub const MAX_LIMIT: usize = 100;

/// Parameters for a click listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickQuery {
    pub timezone: DisplayTimezone,
    pub limit: usize,
    pub order: ClickOrder,
}

impl Default for ClickQuery {
    fn default() -> Self {
        Self {
            timezone: DisplayTimezone::Utc,
            limit: DEFAULT_LIMIT,
            order: ClickOrder::Source,
        }
    }
}

impl ClickQuery {
    pub fn new(timezone: DisplayTimezone) -> Self {
        Self {
            timezone,
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_order(mut self, order: ClickOrder) -> Self {
        self.order = order;
        self
    }
}

/// Counts over a list of mapped clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClickSummary {
    pub total: usize,
    pub with_city: usize,
    pub with_path: usize,
}

impl ClickSummary {
    /// Counts how many clicks carry a city and a path.
    pub fn from_views(views: &[ClickView]) -> Self {
        Self {
            total: views.len(),
            with_city: views.iter().filter(|v| !v.city.is_empty()).count(),
            with_path: views.iter().filter(|v| !v.path.is_empty()).count(),
        }
    }
}

/// Service that loads raw clicks and turns them into display rows.
///
/// Only the source call can fail; mapping itself never does.
pub struct ClickService<S: ClickSource + ?Sized> {
    source: Arc<S>,
}

impl<S: ClickSource + ?Sized> ClickService<S> {
    /// Creates a new click service.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Name of the configured click source.
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetches recent clicks and maps them for display.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is outside `1..=MAX_LIMIT`.
    /// Returns [`AppError::Upstream`] if the click source fails.
    pub async fn recent_clicks(&self, query: ClickQuery) -> Result<Vec<ClickView>, AppError> {
        Self::validate_limit(query.limit)?;

        let raw = self.source.last_clicks(query.limit).await?;
        let mut views = map_clicks(&raw, query.timezone);
        query.order.apply(&mut views);

        tracing::debug!(
            source = self.source.name(),
            count = views.len(),
            timezone = %query.timezone,
            "Mapped clicks"
        );

        Ok(views)
    }

    /// Checks that the click source responds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the click source fails.
    pub async fn probe(&self) -> Result<(), AppError> {
        self.source.last_clicks(1).await?;
        Ok(())
    }

    fn validate_limit(limit: usize) -> Result<(), AppError> {
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, limit
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RawClick;
    use crate::domain::sources::{ClickSourceError, MockClickSource};

    fn raw_clicks() -> Vec<RawClick> {
        vec![
            RawClick::new("https://app.short.cm/login", "2020-05-20T06:19:12.000Z")
                .with_path("/login")
                .with_city("Mumbai"),
            RawClick::new("https://app.short.cm/dashboard", "broken"),
            RawClick::new("https://app.short.cm/products", "2020-05-21T12:30:10.000Z")
                .with_lcpath("/products"),
        ]
    }

    #[tokio::test]
    async fn test_recent_clicks_maps_in_source_order() {
        let mut mock_source = MockClickSource::new();

        mock_source
            .expect_last_clicks()
            .withf(|limit| *limit == 30)
            .times(1)
            .returning(|_| Ok(raw_clicks()));
        mock_source.expect_name().return_const("mock");

        let service = ClickService::new(Arc::new(mock_source));
        let views = service
            .recent_clicks(ClickQuery::new(DisplayTimezone::AsiaSeoul))
            .await
            .unwrap();

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].time, "15:19:12");
        assert_eq!(views[1].date, "");
        assert_eq!(views[2].path, "/products");
        assert_eq!(views[2].date, "2020-05-21");
        assert_eq!(views[2].time, "21:30:10");
    }

    #[tokio::test]
    async fn test_recent_clicks_latest_order() {
        let mut mock_source = MockClickSource::new();

        mock_source
            .expect_last_clicks()
            .times(1)
            .returning(|_| Ok(raw_clicks()));
        mock_source.expect_name().return_const("mock");

        let service = ClickService::new(Arc::new(mock_source));
        let views = service
            .recent_clicks(ClickQuery::default().with_order(ClickOrder::Latest))
            .await
            .unwrap();

        let links: Vec<&str> = views.iter().map(|v| v.link.as_str()).collect();
        assert_eq!(
            links,
            [
                "https://app.short.cm/products",
                "https://app.short.cm/login",
                "https://app.short.cm/dashboard",
            ]
        );
    }

    #[tokio::test]
    async fn test_recent_clicks_passes_limit() {
        let mut mock_source = MockClickSource::new();

        mock_source
            .expect_last_clicks()
            .withf(|limit| *limit == 5)
            .times(1)
            .returning(|_| Ok(vec![]));
        mock_source.expect_name().return_const("mock");

        let service = ClickService::new(Arc::new(mock_source));
        let views = service
            .recent_clicks(ClickQuery::default().with_limit(5))
            .await
            .unwrap();

        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_recent_clicks_rejects_bad_limit() {
        let mut mock_source = MockClickSource::new();
        mock_source.expect_last_clicks().times(0);

        let service = ClickService::new(Arc::new(mock_source));

        for limit in [0, MAX_LIMIT + 1] {
            let result = service
                .recent_clicks(ClickQuery::default().with_limit(limit))
                .await;
            assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_recent_clicks_source_failure() {
        let mut mock_source = MockClickSource::new();

        mock_source
            .expect_last_clicks()
            .times(1)
            .returning(|_| Err(ClickSourceError::Unavailable("offline".to_string())));

        let service = ClickService::new(Arc::new(mock_source));
        let result = service.recent_clicks(ClickQuery::default()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Upstream { .. }));
        assert!(err.message().contains("offline"));
    }

    #[tokio::test]
    async fn test_probe() {
        let mut mock_source = MockClickSource::new();

        mock_source
            .expect_last_clicks()
            .withf(|limit| *limit == 1)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ClickService::new(Arc::new(mock_source));

        assert!(service.probe().await.is_ok());
    }

    #[test]
    fn test_summary_from_views() {
        let views = map_clicks(&raw_clicks(), DisplayTimezone::Utc);
        let summary = ClickSummary::from_views(&views);

        assert_eq!(
            summary,
            ClickSummary {
                total: 3,
                with_city: 1,
                with_path: 2,
            }
        );
    }

    #[test]
    fn test_summary_from_views_empty() {
        let summary = ClickSummary::from_views(&[]);
        assert_eq!(summary, ClickSummary::default());
    }
}
