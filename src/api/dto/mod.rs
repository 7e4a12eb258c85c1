//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; query strings
//! are parsed with `serde_with` helpers.

pub mod clicks;
pub mod health;
