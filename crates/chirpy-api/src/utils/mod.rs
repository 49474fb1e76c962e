//! Shared helpers for the HTTP layer.

pub mod format;

pub use format::{format_timestamp, TIMESTAMP_FORMAT};
