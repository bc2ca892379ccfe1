//! Timer options and global defaults

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counting direction of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Stopwatch: counts elapsed time, duration optional
    Up,
    /// Countdown: counts remaining time, duration required
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// How much the display driver shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Progress bar with elapsed and remaining time
    Full,
    /// A single time value, no progress bar
    Simple,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Full => f.write_str("full"),
            DisplayMode::Simple => f.write_str("simple"),
        }
    }
}

/// Optional timer settings.
///
/// This is both the persisted snapshot of a saved timer and the set of
/// command-line overrides. Unset fields fall back to [`Defaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl TimerOptions {
    /// Create options with only a duration set
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }

    /// Apply `overrides` on top of these options; only fields set in
    /// `overrides` replace existing values.
    pub fn merge(self, overrides: TimerOptions) -> Self {
        Self {
            duration: overrides.duration.or(self.duration),
            direction: overrides.direction.or(self.direction),
            name: overrides.name.or(self.name),
            sound: overrides.sound.or(self.sound),
            display: overrides.display.or(self.display),
            precision: overrides.precision.or(self.precision),
        }
    }

    /// Check if no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Global defaults consulted whenever a timer leaves a field unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub direction: Direction,
    pub sound: bool,
    pub display: DisplayMode,
    pub precision: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            direction: Direction::Down,
            sound: true,
            display: DisplayMode::Full,
            precision: 0,
        }
    }
}

impl Defaults {
    /// Defaults with every field set in `overrides` replaced
    pub fn apply(self, overrides: &TimerOptions) -> Self {
        Self {
            direction: overrides.direction.unwrap_or(self.direction),
            sound: overrides.sound.unwrap_or(self.sound),
            display: overrides.display.unwrap_or(self.display),
            precision: overrides.precision.unwrap_or(self.precision),
        }
    }
}

impl fmt::Display for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, precision {}",
            self.direction,
            if self.sound { "sound" } else { "no sound" },
            self.display,
            self.precision
        )
    }
}
