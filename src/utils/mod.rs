//! Utility functions module
//!
//! This module contains utility functions used throughout the application.

pub mod prompt;
pub mod signals;

// Re-export main functions
pub use prompt::confirm;
pub use signals::shutdown_signal;
