//! stimer - A command-line countdown timer and stopwatch
//!
//! This library provides duration parsing in unit (`1h30m`) and clock
//! (`01:30:00`) notation, clock-style rendering, the timer state model, and
//! the storage and display layers built on top of them.

pub mod clock;
pub mod commands;
pub mod config;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use clock::{parse_duration, render};
pub use config::Config;
pub use state::{Defaults, Direction, DisplayMode, TimerError, TimerOptions, TimerState};
pub use storage::Repository;
