//! # Short.io Clicks
//!
//! A small HTTP service that reformats Short.io click logs into a compact,
//! display-ready view model, built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as a larger service would:
//!
//! - **Domain Layer** ([`domain`]) - Click entities, timezone handling, the click mapper
//! - **Application Layer** ([`application`]) - Click retrieval and formatting service
//! - **Infrastructure Layer** ([`infrastructure`]) - Click sources (sample data, JSON file)
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Click Mapping
//!
//! Each raw click becomes exactly one view row `{link, date, time, path, city}`.
//! Missing data falls back to empty strings, timestamps are rendered in `UTC`
//! or `Asia/Seoul`, and an unparseable timestamp is logged, never returned as
//! an error. See [`domain::click_mapper`].
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: serve clicks saved from the Short.io API instead of the sample
//! export CLICKS_FILE="./last_clicks.json"
//!
//! # Start the service
//! cargo run
//!
//! curl 'http://localhost:3000/api/shortio/clicks?tz=Asia/Seoul'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ClickService;
    pub use crate::application::services::click_service::{ClickQuery, ClickSummary};
    pub use crate::domain::click_mapper::{map_click, map_clicks};
    pub use crate::domain::click_order::ClickOrder;
    pub use crate::domain::entities::{ClickView, RawClick};
    pub use crate::domain::timezone::DisplayTimezone;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
