//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ClickService;
use crate::application::services::click_service::DEFAULT_LIMIT;
use crate::domain::sources::ClickSource;
use crate::domain::timezone::DisplayTimezone;

#[derive(Clone)]
pub struct AppState {
    pub click_service: Arc<ClickService<dyn ClickSource>>,
    /// Timezone used when a request does not pass `tz`.
    pub default_timezone: DisplayTimezone,
    /// Number of clicks fetched when a request does not pass `limit`.
    pub default_limit: usize,
}

impl AppState {
    pub fn new(source: Arc<dyn ClickSource>) -> Self {
        Self {
            click_service: Arc::new(ClickService::new(source)),
            default_timezone: DisplayTimezone::default(),
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_default_timezone(mut self, timezone: DisplayTimezone) -> Self {
        self.default_timezone = timezone;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }
}
