//! Core domain entities representing click data.
//!
//! # Entity Types
//!
//! - [`RawClick`] - A click log entry as received from the analytics provider
//! - [`ClickView`] - The simplified row shown to users

pub mod click_view;
pub mod raw_click;

pub use click_view::ClickView;
pub use raw_click::RawClick;
