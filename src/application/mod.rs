//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers
//! and the CLI.
//!
//! # Available Services
//!
//! - [`services::click_service::ClickService`] - Click retrieval, mapping, and ordering

pub mod services;
