//! Click source trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::sources`. Mock
//! implementations are generated via `mockall` for testing.

pub mod click_source;

pub use click_source::{ClickSource, ClickSourceError, ClickSourceResult};

#[cfg(test)]
pub use click_source::MockClickSource;
