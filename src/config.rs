//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

use crate::{
    clock::parse_duration,
    state::{Direction, DisplayMode, TimerOptions},
};

/// Notation guide printed by `--help-duration`
pub const DURATION_HELP: &str = "\
Timer DURATION can be specified in 2 formats:

hms format -> #h#m#s
    where # can be any positive number including decimals.
    \"hms\" refers to \"hours\", \"minutes\", and \"seconds\" respectively.
    Any time unit can be omitted. Blanks between time units are counted as 0's.
        Examples:
            4h3s -> 4 hours and 3 seconds
            1.5h -> 1 hour and 30 minutes
            3h105.4m8s -> 4 hours 45 minutes and 32 seconds
            3hm1s -> 3 hours and 1 second

clock format -> ##:##:##
    where # can be any positive number including decimals.
    \":\"'s delimit \"hours\", \"minutes\", and \"seconds\".
    Leading time units can be omitted. Blanks between time units are counted as 0's.
        Examples:
            04:03 -> 4 minutes and 3 seconds
            4:3 -> 4 minutes and 3 seconds
            20 -> 20 seconds
            5:00:6.5 -> 5 hours and 6.5 seconds
            5::6.5 -> 5 hours and 6.5 seconds
            5.5:: -> 5 hours and 30 minutes
            :45: -> 45 minutes";

/// The duration text matched neither notation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "duration {0:?} could not be parsed; use character format \"#h#m#s.###\" or clock format \"##:##:##.###\""
)]
pub struct InvalidDuration(pub String);

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "stimer")]
#[command(about = "A command-line countdown timer and stopwatch")]
#[command(version)]
pub struct Config {
    /// Duration in "hms" format (#h#m#s) or clock format (##:##:##); see --help-duration
    #[arg(value_name = "DURATION")]
    pub duration: Option<String>,

    /// Count up (stopwatch mode), duration not required
    #[arg(short = 'u', long, conflicts_with = "down")]
    pub up: bool,

    /// Count down (timer mode), default; useful to override saved timers
    #[arg(short = 'U', long)]
    pub down: bool,

    /// No alert sound
    #[arg(short = 'a', long, conflicts_with = "sound")]
    pub no_sound: bool,

    /// Alert sound, default; useful to override saved timers
    #[arg(short = 'A', long)]
    pub sound: bool,

    /// Simple output with no progress bar
    #[arg(short = 'o', long, conflicts_with = "full")]
    pub simple: bool,

    /// Full output, default; useful to override saved timers
    #[arg(short = 'O', long)]
    pub full: bool,

    /// Decimal precision N {0, 1, 2...}; default dependent on DURATION
    #[arg(short, long, value_name = "N")]
    pub precision: Option<usize>,

    /// Save timer
    #[arg(short, long, conflicts_with_all = ["save_only", "remove", "list"])]
    pub save: bool,

    /// Save timer and do not run
    #[arg(short = 'S', long, conflicts_with_all = ["remove", "list"])]
    pub save_only: bool,

    /// Remove saved timer
    #[arg(short, long, value_name = "NAME", conflicts_with = "list")]
    pub remove: Option<String>,

    /// List saved timers
    #[arg(short, long)]
    pub list: bool,

    /// Store the direction, sound, display and precision flags as the
    /// global defaults
    #[arg(long, conflicts_with_all = ["save", "save_only", "remove", "list", "timer", "duration", "name"])]
    pub set_defaults: bool,

    /// Name timer when saving
    #[arg(short, long)]
    pub name: Option<String>,

    /// Run saved timer
    #[arg(short, long, value_name = "NAME")]
    pub timer: Option<String>,

    /// Explain the DURATION formats
    #[arg(long)]
    pub help_duration: bool,

    /// Timer store file (defaults to the user configuration directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Timer options set on the command line; unset flags stay `None`
    pub fn overrides(&self) -> Result<TimerOptions, InvalidDuration> {
        let duration = match &self.duration {
            Some(text) => Some(parse_duration(text).ok_or_else(|| InvalidDuration(text.clone()))?),
            None => None,
        };

        let direction = if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        };

        let sound = if self.sound {
            Some(true)
        } else if self.no_sound {
            Some(false)
        } else {
            None
        };

        let display = if self.full {
            Some(DisplayMode::Full)
        } else if self.simple {
            Some(DisplayMode::Simple)
        } else {
            None
        };

        Ok(TimerOptions {
            duration,
            direction,
            name: self.name.clone(),
            sound,
            display,
            precision: self.precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("stimer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn unset_flags_leave_options_empty() {
        assert!(config(&[]).overrides().unwrap().is_empty());
    }

    #[test]
    fn flags_become_overrides() {
        let options = config(&["1h30m", "-u", "-a", "-o", "-p", "2", "-n", "nap"])
            .overrides()
            .unwrap();
        assert_eq!(options.duration, Some(5400.0));
        assert_eq!(options.direction, Some(Direction::Up));
        assert_eq!(options.sound, Some(false));
        assert_eq!(options.display, Some(DisplayMode::Simple));
        assert_eq!(options.precision, Some(2));
        assert_eq!(options.name.as_deref(), Some("nap"));
    }

    #[test]
    fn unparseable_duration_is_reported() {
        let err = config(&["4a"]).overrides().unwrap_err();
        assert_eq!(err, InvalidDuration("4a".to_string()));
    }

    #[test]
    fn opposing_flags_conflict() {
        assert!(Config::try_parse_from(["stimer", "--up", "--down"]).is_err());
        assert!(Config::try_parse_from(["stimer", "--list", "--save"]).is_err());
        assert!(Config::try_parse_from(["stimer", "-r", "1", "-S"]).is_err());
        assert!(Config::try_parse_from(["stimer", "--set-defaults", "-t", "tea"]).is_err());
        assert!(Config::try_parse_from(["stimer", "--set-defaults", "5m"]).is_err());
    }

    #[test]
    fn verbose_switches_log_level() {
        assert_eq!(config(&["-v"]).log_level(), "debug");
        assert_eq!(config(&[]).log_level(), "warn");
    }
}
