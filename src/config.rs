//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_TIMEZONE` - Timezone when a request omits `tz`: `UTC` or `Asia/Seoul` (default: `UTC`)
//! - `CLICKS_FILE` - JSON file of raw click records; the built-in sample is used when unset
//! - `CLICKS_DEFAULT_LIMIT` - Clicks returned when a request omits `limit` (default: 30, 1-100)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::application::services::click_service::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::domain::timezone::DisplayTimezone;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub default_timezone: DisplayTimezone,
    /// Source file for raw clicks. `None` serves the built-in sample records.
    pub clicks_file: Option<PathBuf>,
    pub default_limit: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DEFAULT_TIMEZONE` or `CLICKS_DEFAULT_LIMIT` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_timezone = match env::var("DEFAULT_TIMEZONE") {
            Ok(name) => name
                .parse::<DisplayTimezone>()
                .context("DEFAULT_TIMEZONE must be 'UTC' or 'Asia/Seoul'")?,
            Err(_) => DisplayTimezone::Utc,
        };

        let clicks_file = env::var("CLICKS_FILE").ok().map(PathBuf::from);

        let default_limit = match env::var("CLICKS_DEFAULT_LIMIT") {
            Ok(v) => v
                .parse::<usize>()
                .with_context(|| format!("CLICKS_DEFAULT_LIMIT must be a number, got '{}'", v))?,
            Err(_) => DEFAULT_LIMIT,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            default_timezone,
            clicks_file,
            default_limit,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `default_limit` is outside 1-100
    /// - `clicks_file` is set but empty
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(1..=MAX_LIMIT).contains(&self.default_limit) {
            anyhow::bail!(
                "CLICKS_DEFAULT_LIMIT must be between 1 and {}, got {}",
                MAX_LIMIT,
                self.default_limit
            );
        }

        if let Some(ref path) = self.clicks_file
            && path.as_os_str().is_empty()
        {
            anyhow::bail!("CLICKS_FILE must not be empty when set");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Default timezone: {}", self.default_timezone);
        tracing::info!("  Default limit: {}", self.default_limit);

        match self.clicks_file {
            Some(ref path) => tracing::info!("  Click source: file ({})", path.display()),
            None => tracing::info!("  Click source: built-in sample"),
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
