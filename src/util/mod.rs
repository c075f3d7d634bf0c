//! Utility functions module
//!
//! Formatting helpers shared by the display and log output.

pub mod units;

pub use units::{format_clock, TimeParts, MAX_DISPLAY_MILLIS};
