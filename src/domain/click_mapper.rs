//! Conversion of raw Short.io click logs into display rows.
//!
//! The mapping is total: every input record yields exactly one [`ClickView`],
//! in the same position, regardless of how malformed it is. A timestamp that
//! cannot be parsed leaves `date` and `time` empty and is only logged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::entities::{ClickView, RawClick};
use crate::domain::timezone::DisplayTimezone;

/// Maps a batch of raw clicks, preserving length and order.
pub fn map_clicks(records: &[RawClick], tz: DisplayTimezone) -> Vec<ClickView> {
    records.iter().map(|record| map_click(record, tz)).collect()
}

/// Maps a single raw click.
///
/// # Field Rules
///
/// - `link`: `url`, or empty
/// - `date` / `time`: `dt` rendered in `tz`, or both empty
/// - `path`: first non-empty of `path`, `lcpath`, or empty
/// - `city`: `city`, or empty
pub fn map_click(record: &RawClick, tz: DisplayTimezone) -> ClickView {
    let link = non_empty(&record.url).unwrap_or_default().to_string();

    let (date, time) = match non_empty(&record.dt) {
        Some(raw) => match parse_instant(raw) {
            Some(instant) => tz.civil_date_time(instant),
            None => {
                tracing::warn!(dt = %raw, "Failed to parse click timestamp");
                (String::new(), String::new())
            }
        },
        None => (String::new(), String::new()),
    };

    let path = non_empty(&record.path)
        .or_else(|| non_empty(&record.lcpath))
        .unwrap_or_default()
        .to_string();

    let city = record.city.clone().unwrap_or_default();

    ClickView {
        link,
        date,
        time,
        path,
        city,
    }
}

/// Parses an ISO-8601 timestamp into an instant.
///
/// # Accepted Forms
///
/// - RFC 3339 with any offset: `2020-05-20T06:19:12.000Z`, `2020-05-20T15:19:12+09:00`
/// - No offset, read as UTC: `2020-05-20T06:19:12`, `2020-05-20 06:19:12.5`
/// - Date only, midnight UTC: `2020-05-20`
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
