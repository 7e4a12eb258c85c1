//! Click source implementations.

pub mod file_source;
pub mod sample_source;

pub use file_source::FileClickSource;
pub use sample_source::SampleClickSource;
