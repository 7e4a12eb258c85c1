//! Domain layer containing click entities and the mapping logic.
//!
//! This module is independent of HTTP and of where click logs come from.
//!
//! # Architecture
//!
//! - [`entities`] - Raw click records and display rows
//! - [`timezone`] - Supported display timezones
//! - [`click_mapper`] - Raw click → display row conversion
//! - [`click_order`] - Ordering of mapped rows
//! - [`click_export`] - CSV rendering of mapped rows
//! - [`sources`] - Click source trait definitions
//!
//! # Click Processing Flow
//!
//! 1. A [`sources::ClickSource`] returns raw clicks
//! 2. [`click_mapper::map_clicks`] turns each into a [`entities::ClickView`]
//! 3. [`click_order::ClickOrder`] optionally reorders the rows
//! 4. The API layer serializes them as JSON or CSV

pub mod click_export;
pub mod click_mapper;
pub mod click_order;
pub mod entities;
pub mod sources;
pub mod timezone;
