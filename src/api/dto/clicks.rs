//! DTOs for click log endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::click_service::{ClickQuery, ClickSummary};
use crate::domain::click_order::ClickOrder;
use crate::domain::entities::ClickView;
use crate::domain::timezone::DisplayTimezone;

/// Query parameters shared by the click endpoints.
///
/// - `tz`: `UTC` or `Asia/Seoul`; other values fall back to UTC
/// - `limit`: number of clicks to fetch (1-100)
/// - `order`: `source` or `latest`
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ClicksQueryParams {
    #[serde(default)]
    pub tz: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<usize>,

    #[serde(default)]
    pub order: Option<ClickOrder>,
}

impl ClicksQueryParams {
    /// Resolves the parameters against server defaults.
    ///
    /// An absent `tz` uses `default_timezone`; a present but unrecognized one
    /// is treated as UTC.
    pub fn into_query(
        self,
        default_timezone: DisplayTimezone,
        default_limit: usize,
    ) -> ClickQuery {
        let timezone = match self.tz.as_deref() {
            None => default_timezone,
            Some(name) => DisplayTimezone::from_param_lenient(Some(name)),
        };

        ClickQuery::new(timezone)
            .with_limit(self.limit.unwrap_or(default_limit))
            .with_order(self.order.unwrap_or_default())
    }
}

/// Successful click listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClicksResponse {
    pub success: bool,
    pub data: Vec<ClickView>,
    pub count: usize,
    pub timezone: DisplayTimezone,
}

impl ClicksResponse {
    pub fn new(data: Vec<ClickView>, timezone: DisplayTimezone) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            timezone,
        }
    }
}

/// Counts over the current click listing.
#[derive(Debug, Serialize)]
pub struct ClickSummaryResponse {
    pub success: bool,
    pub timezone: DisplayTimezone,
    #[serde(flatten)]
    pub summary: ClickSummary,
}
