//! HTTP middleware for request processing.
//!
//! Provides observability and panic containment middleware.

pub mod catch_panic;
pub mod tracing;
