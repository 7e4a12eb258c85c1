//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`sources`] - Click source implementations (sample data and JSON file)

pub mod sources;
