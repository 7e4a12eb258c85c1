//! HTTP server initialization and runtime setup.
//!
//! Handles click source selection, state construction, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::sources::ClickSource;
use crate::infrastructure::sources::{FileClickSource, SampleClickSource};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Click source (file when `CLICKS_FILE` is set, built-in sample otherwise)
/// - Click service and shared state
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let source = build_click_source(&config);
    tracing::info!("Click source: {}", source.name());

    let state = AppState::new(source)
        .with_default_timezone(config.default_timezone)
        .with_default_limit(config.default_limit);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Picks the click source described by the configuration.
pub fn build_click_source(config: &Config) -> Arc<dyn ClickSource> {
    match config.clicks_file {
        Some(ref path) => Arc::new(FileClickSource::new(path)),
        None => Arc::new(SampleClickSource::new()),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timezone::DisplayTimezone;
    use std::path::PathBuf;

    fn config(clicks_file: Option<PathBuf>) -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_timezone: DisplayTimezone::Utc,
            clicks_file,
            default_limit: 30,
        }
    }

    #[test]
    fn test_build_click_source_defaults_to_sample() {
        assert_eq!(build_click_source(&config(None)).name(), "sample");
    }

    #[test]
    fn test_build_click_source_uses_file() {
        let source = build_click_source(&config(Some(PathBuf::from("/tmp/clicks.json"))));
        assert_eq!(source.name(), "file");
    }
}
