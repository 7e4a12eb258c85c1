//! Built-in sample click logs.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::RawClick;
use crate::domain::sources::{ClickSource, ClickSourceResult};

/// A click source that serves a fixed set of records shaped like real
/// `last_clicks` responses.
///
/// Used when no click file is configured, for demos, and in tests. The
/// records deliberately cover the fallbacks: a fully populated click, one
/// without a city, and ones with only `path` or only `lcpath`.
pub struct SampleClickSource;

impl SampleClickSource {
    pub fn new() -> Self {
        debug!("Using SampleClickSource (built-in click records)");
        Self
    }

    /// Returns every sample record.
    pub fn records() -> Vec<RawClick> {
        vec![
            RawClick {
                host: Some("shortcm.xyz".to_string()),
                method: Some("GET".to_string()),
                st: Some(302),
                ip: Some("202.83.57.227".to_string()),
                proto: Some("https".to_string()),
                referer: Some(
                    "https://blog-short-io.cdn.ampproject.org/v/s/blog.short.io/shortlinks-youtube/amp/?amp_js_v=a3&amp_gsa=1&usqp=mq331AQFKAGwASA%3D"
                        .to_string(),
                ),
                ua: Some("Mozilla/5.0 (Linux; Android 10; HD1901)".to_string()),
                human: Some(true),
                browser: Some("Chrome Mobile".to_string()),
                browser_version: Some("81".to_string()),
                social: Some(String::new()),
                refhost: Some("blog-short-io.cdn.ampproject.org".to_string()),
                os: Some("Android".to_string()),
                utm_source: Some(String::new()),
                utm_medium: Some("unknown".to_string()),
                utm_campaign: Some(String::new()),
                ..RawClick::new("https://app.short.cm/login", "2020-05-20T06:19:12.000Z")
                    .with_path("/login")
                    .with_lcpath("/login")
                    .with_country("India")
                    .with_city("Mumbai")
            },
            RawClick {
                host: Some("shortcm.xyz".to_string()),
                method: Some("GET".to_string()),
                st: Some(200),
                proto: Some("https".to_string()),
                referer: Some(String::new()),
                ua: Some("Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string()),
                human: Some(true),
                browser: Some("Chrome".to_string()),
                browser_version: Some("90".to_string()),
                os: Some("Windows".to_string()),
                ..RawClick::new("https://app.short.cm/dashboard", "2020-05-20T15:30:45.000Z")
                    .with_path("/dashboard")
                    .with_lcpath("/dashboard")
                    .with_country("South Korea")
            },
            RawClick {
                host: Some("shortcm.xyz".to_string()),
                method: Some("GET".to_string()),
                st: Some(200),
                ..RawClick::new("https://app.short.cm/settings", "2020-05-20T20:45:30.000Z")
                    .with_lcpath("/settings")
                    .with_country("United States")
                    .with_city("New York")
            },
            RawClick {
                host: Some("shortcm.xyz".to_string()),
                ..RawClick::new("https://app.short.cm/api/data", "2020-05-21T08:15:22.000Z")
                    .with_path("/api/data")
                    .with_country("Japan")
                    .with_city("Tokyo")
            },
            RawClick {
                host: Some("shortcm.xyz".to_string()),
                ..RawClick::new("https://app.short.cm/products", "2020-05-21T12:30:10.000Z")
                    .with_lcpath("/products")
                    .with_country("Germany")
            },
        ]
    }
}

impl Default for SampleClickSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClickSource for SampleClickSource {
    fn name(&self) -> &'static str {
        "sample"
    }

    async fn last_clicks(&self, limit: usize) -> ClickSourceResult<Vec<RawClick>> {
        Ok(Self::records().into_iter().take(limit).collect())
    }
}
