//! Foreground tasks module
//!
//! This module contains the display loop that runs while a timer counts.

pub mod display;

// Re-export main functions
pub use display::{frame, run_display, status_line, DisplayLayout};
