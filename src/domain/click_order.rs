//! Ordering applied to mapped clicks before they are returned.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::domain::entities::ClickView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported order '{0}', expected 'source' or 'latest'")]
pub struct ClickOrderError(String);

/// How mapped clicks are ordered in a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum ClickOrder {
    /// Same order as the click source returned them.
    #[default]
    Source,
    /// Newest `date time` first; rows without a timestamp go last.
    Latest,
}

impl ClickOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ClickOrder::Source => "source",
            ClickOrder::Latest => "latest",
        }
    }

    /// Reorders `views` in place.
    ///
    /// The sort is stable: rows with equal keys keep their relative order.
    pub fn apply(&self, views: &mut [ClickView]) {
        if let ClickOrder::Latest = self {
            views.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        }
    }
}

impl fmt::Display for ClickOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClickOrder {
    type Err = ClickOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" => Ok(ClickOrder::Source),
            "latest" | "desc" => Ok(ClickOrder::Latest),
            _ => Err(ClickOrderError(s.to_string())),
        }
    }
}
