//! Raw click record as reported by the Short.io `last_clicks` statistics API.

use serde::Deserialize;
use serde_json::Value;
use serde_with::{DefaultOnError, serde_as};

/// A single click log entry received from the analytics provider.
///
/// Every field is optional. A field that is missing, `null`, or carries an
/// unexpected JSON type deserializes to `None` instead of rejecting the whole
/// record, so a malformed entry still reaches the mapper.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawClick {
    #[serde_as(as = "DefaultOnError")]
    pub host: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub path: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub method: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub url: Option<String>,
    /// ISO-8601 timestamp, e.g. `2020-05-20T06:19:12.000Z`.
    #[serde_as(as = "DefaultOnError")]
    pub dt: Option<String>,
    /// HTTP status returned to the visitor.
    #[serde_as(as = "DefaultOnError")]
    pub st: Option<u16>,
    #[serde_as(as = "DefaultOnError")]
    pub ip: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub proto: Option<String>,
    #[serde(rename = "ref")]
    #[serde_as(as = "DefaultOnError")]
    pub referer: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub ua: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub human: Option<bool>,
    #[serde_as(as = "DefaultOnError")]
    pub browser: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub browser_version: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub country: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub city: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub social: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub refhost: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub os: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub utm_source: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub utm_medium: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub utm_campaign: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub goal_completed: Option<bool>,
    #[serde_as(as = "DefaultOnError")]
    pub ab_path: Option<String>,
    /// Lower-cased copy of `path`.
    #[serde_as(as = "DefaultOnError")]
    pub lcpath: Option<String>,
}

impl RawClick {
    /// Creates a record with only the destination URL and timestamp set.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = RawClick::new("https://app.short.cm/login", "2020-05-20T06:19:12.000Z")
    ///     .with_path("/login")
    ///     .with_city("Mumbai");
    /// ```
    pub fn new(url: impl Into<String>, dt: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            dt: Some(dt.into()),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_lcpath(mut self, lcpath: impl Into<String>) -> Self {
        self.lcpath = Some(lcpath.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Converts an arbitrary JSON value into a record.
    ///
    /// Values that are not JSON objects become an empty record, which the
    /// mapper still turns into a (blank) view row.
    pub fn from_value_lossy(value: Value) -> Self {
        if !value.is_object() {
            tracing::warn!(
                kind = json_kind(&value),
                "Click entry is not an object; treating as empty"
            );
            return Self::default();
        }

        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read click entry; treating as empty");
            Self::default()
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
