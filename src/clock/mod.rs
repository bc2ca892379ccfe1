//! Duration notation parsing and clock-style rendering
//!
//! This module holds the pure time-value engine: turning user supplied
//! duration text into seconds, and seconds back into `HH:MM:SS` strings.

pub mod parse;
pub mod render;

// Re-export main functions
pub use parse::parse_duration;
pub use render::{render, ClockTime, TimeFormat};
