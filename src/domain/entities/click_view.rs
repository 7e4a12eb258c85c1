//! Simplified click record for display.

use serde::{Deserialize, Serialize};

/// A click reduced to the fields shown in the UI.
///
/// Every field is always present. Missing source data is represented by an
/// empty string, never `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickView {
    /// Destination URL.
    pub link: String,
    /// `YYYY-MM-DD` in the requested timezone.
    pub date: String,
    /// `HH:mm:ss` in the requested timezone.
    pub time: String,
    pub path: String,
    pub city: String,
}

impl ClickView {
    /// Returns true if both `date` and `time` were derived from the timestamp.
    pub fn has_timestamp(&self) -> bool {
        !self.date.is_empty() && !self.time.is_empty()
    }

    /// Key used for newest-first ordering.
    ///
    /// `None` sorts below every dated record, so undated rows end up last
    /// when ordering descending.
    pub fn sort_key(&self) -> Option<(&str, &str)> {
        self.has_timestamp()
            .then(|| (self.date.as_str(), self.time.as_str()))
    }
}
