//! Timer state module
//!
//! This module contains the timer model, its options and the errors raised
//! while configuring or starting it.

pub mod error;
pub mod options;
pub mod timer_state;

// Re-export main types
pub use error::TimerError;
pub use options::{Defaults, Direction, DisplayMode, TimerOptions};
pub use timer_state::TimerState;
