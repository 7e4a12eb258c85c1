//! Timezones supported for displaying click timestamps.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Asia::Seoul;
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Error returned when a timezone name is not one of the supported values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimezoneError {
    #[error("Unsupported timezone '{0}', expected 'UTC' or 'Asia/Seoul'")]
    UnknownTimezone(String),
}

/// Timezone in which click dates and times are rendered.
///
/// Serialized as its canonical IANA-style name (`UTC`, `Asia/Seoul`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub enum DisplayTimezone {
    #[default]
    Utc,
    /// Korea Standard Time (UTC+9).
    AsiaSeoul,
}

impl DisplayTimezone {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DisplayTimezone::Utc => "UTC",
            DisplayTimezone::AsiaSeoul => "Asia/Seoul",
        }
    }

    /// Resolves a request parameter, falling back to UTC.
    ///
    /// A missing or blank value is UTC. An unrecognized value is also UTC,
    /// with a warning logged.
    pub fn from_param_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Utc,
            Some(name) => name.parse().unwrap_or_else(|e: TimezoneError| {
                tracing::warn!("{}; falling back to UTC", e);
                Self::Utc
            }),
        }
    }

    /// Formats an instant as civil `(YYYY-MM-DD, HH:MM:SS)` in this timezone.
    pub fn civil_date_time(&self, instant: DateTime<Utc>) -> (String, String) {
        match self {
            DisplayTimezone::Utc => (
                instant.format("%Y-%m-%d").to_string(),
                instant.format("%H:%M:%S").to_string(),
            ),
            DisplayTimezone::AsiaSeoul => {
                let local = instant.with_timezone(&Seoul);
                (
                    local.format("%Y-%m-%d").to_string(),
                    local.format("%H:%M:%S").to_string(),
                )
            }
        }
    }

    /// Slug used in export file names, e.g. `asia_seoul`.
    pub fn file_slug(&self) -> String {
        self.as_str().to_ascii_lowercase().replace('/', "_")
    }
}

impl fmt::Display for DisplayTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayTimezone {
    type Err = TimezoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        if name.eq_ignore_ascii_case("UTC") {
            Ok(Self::Utc)
        } else if name.eq_ignore_ascii_case("Asia/Seoul")
            || name.eq_ignore_ascii_case("KST")
            || name.eq_ignore_ascii_case("Seoul")
        {
            Ok(Self::AsiaSeoul)
        } else {
            Err(TimezoneError::UnknownTimezone(name.to_string()))
        }
    }
}
