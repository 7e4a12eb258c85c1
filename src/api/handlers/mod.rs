//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clicks;
pub mod health;

pub use clicks::{click_export_handler, click_summary_handler, clicks_handler};
pub use health::health_handler;
