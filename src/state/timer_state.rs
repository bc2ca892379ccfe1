//! Timer state structure and time queries

use std::time::Instant;
use tracing::debug;

use super::{Defaults, Direction, DisplayMode, TimerError, TimerOptions};
use crate::clock::{ClockTime, TimeFormat};

/// A countdown or stopwatch measured against the monotonic clock.
///
/// The duration is fixed at construction. Elapsed time is zero until
/// [`TimerState::start`] is called and is clamped to the duration afterwards.
#[derive(Debug, Clone)]
pub struct TimerState {
    options: TimerOptions,
    defaults: Defaults,
    start_instant: Option<Instant>,
}

impl TimerState {
    /// Create a timer from options, using built-in defaults for unset fields
    pub fn new(options: TimerOptions) -> Self {
        Self::with_defaults(options, Defaults::default())
    }

    /// Create a timer from options and a resolved set of global defaults
    pub fn with_defaults(options: TimerOptions, defaults: Defaults) -> Self {
        let options = TimerOptions {
            duration: options.duration.map(|d| d.max(0.0)),
            ..options
        };
        Self {
            options,
            defaults,
            start_instant: None,
        }
    }

    /// Restore a timer from a JSON snapshot. The timer is not started.
    pub fn from_json(json: &str) -> Result<Self, TimerError> {
        let options = serde_json::from_str(json).map_err(|e| TimerError::Decode(e.to_string()))?;
        Ok(Self::new(options))
    }

    /// Serialize the timer's own settings. The start instant is not included.
    pub fn to_json(&self) -> Result<String, TimerError> {
        serde_json::to_string(&self.options).map_err(|e| TimerError::Encode(e.to_string()))
    }

    /// Settings explicitly set on this timer, suitable for persisting
    pub fn snapshot(&self) -> TimerOptions {
        self.options.clone()
    }

    /// Start counting from now. Calling it again resets the origin.
    pub fn start(&mut self) -> Result<(), TimerError> {
        self.start_at(Instant::now())
    }

    /// Start counting from the given instant
    pub fn start_at(&mut self, now: Instant) -> Result<(), TimerError> {
        if self.options.duration.is_none() && self.direction() == Direction::Down {
            return Err(TimerError::MissingDuration);
        }
        self.start_instant = Some(now);
        debug!(
            "Timer started with duration: {}",
            self.options.duration.map_or_else(|| "None".to_string(), |d| d.to_string())
        );
        Ok(())
    }

    /// Check if the timer has been started
    pub fn started(&self) -> bool {
        self.start_instant.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.options.name.as_deref()
    }

    pub fn direction(&self) -> Direction {
        self.options.direction.unwrap_or(self.defaults.direction)
    }

    pub fn sound(&self) -> bool {
        self.options.sound.unwrap_or(self.defaults.sound)
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.options.display.unwrap_or(self.defaults.display)
    }

    /// Precision used for elapsed and remaining values
    pub fn precision(&self) -> usize {
        self.options
            .precision
            .or_else(|| self.inferred_precision())
            .unwrap_or(self.defaults.precision)
    }

    /// Precision used for the duration itself: the larger of the override
    /// and the duration's own decimal digits
    pub fn duration_precision(&self) -> usize {
        match (self.options.precision, self.inferred_precision()) {
            (Some(explicit), Some(inferred)) => explicit.max(inferred),
            (explicit, inferred) => explicit.or(inferred).unwrap_or(0),
        }
    }

    /// Number of decimal digits in the duration, `None` without a duration
    fn inferred_precision(&self) -> Option<usize> {
        self.options.duration.map(decimal_digits)
    }

    /// Duration in seconds
    pub fn duration(&self) -> Option<f64> {
        self.options.duration
    }

    /// Duration as a clock string
    pub fn duration_clock(&self, precision: Option<usize>) -> Option<String> {
        self.duration_as(TimeFormat::Clock, precision)
    }

    /// Duration in the requested format
    pub fn duration_as(&self, format: TimeFormat, precision: Option<usize>) -> Option<String> {
        let precision = precision.unwrap_or_else(|| self.duration_precision());
        self.duration()
            .map(|d| ClockTime::new(d).format(format, Some(precision)))
    }

    /// Elapsed seconds, clamped to the duration
    pub fn elapsed(&self) -> f64 {
        self.elapsed_at(Instant::now())
    }

    /// Elapsed seconds as of `now`
    pub fn elapsed_at(&self, now: Instant) -> f64 {
        let Some(start) = self.start_instant else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start).as_secs_f64();
        match self.options.duration {
            Some(duration) => elapsed.min(duration),
            None => elapsed,
        }
    }

    /// Elapsed time as a clock string
    pub fn elapsed_clock(&self, precision: Option<usize>) -> String {
        self.elapsed_clock_at(Instant::now(), precision)
    }

    pub fn elapsed_clock_at(&self, now: Instant, precision: Option<usize>) -> String {
        self.elapsed_as_at(now, TimeFormat::Clock, precision)
    }

    /// Elapsed time in the requested format
    pub fn elapsed_as(&self, format: TimeFormat, precision: Option<usize>) -> String {
        self.elapsed_as_at(Instant::now(), format, precision)
    }

    pub fn elapsed_as_at(&self, now: Instant, format: TimeFormat, precision: Option<usize>) -> String {
        let precision = precision.unwrap_or_else(|| self.precision());
        ClockTime::new(self.elapsed_at(now)).format(format, Some(precision))
    }

    /// Remaining seconds, `None` without a duration
    pub fn remaining(&self) -> Option<f64> {
        self.remaining_at(Instant::now())
    }

    pub fn remaining_at(&self, now: Instant) -> Option<f64> {
        self.options
            .duration
            .map(|duration| (duration - self.elapsed_at(now)).max(0.0))
    }

    /// Remaining time as a clock string
    pub fn remaining_clock(&self, precision: Option<usize>) -> Option<String> {
        self.remaining_clock_at(Instant::now(), precision)
    }

    pub fn remaining_clock_at(&self, now: Instant, precision: Option<usize>) -> Option<String> {
        self.remaining_as_at(now, TimeFormat::Clock, precision)
    }

    /// Remaining time in the requested format, `None` without a duration
    pub fn remaining_as(&self, format: TimeFormat, precision: Option<usize>) -> Option<String> {
        self.remaining_as_at(Instant::now(), format, precision)
    }

    pub fn remaining_as_at(&self, now: Instant, format: TimeFormat, precision: Option<usize>) -> Option<String> {
        let precision = precision.unwrap_or_else(|| self.precision());
        self.remaining_at(now)
            .map(|remaining| ClockTime::new(remaining).format(format, Some(precision)))
    }

    /// Check if the display should keep running
    pub fn should_continue(&self) -> bool {
        self.should_continue_at(Instant::now())
    }

    pub fn should_continue_at(&self, now: Instant) -> bool {
        match self.direction() {
            Direction::Up => match self.options.duration {
                Some(duration) => self.elapsed_at(now) < duration,
                None => true,
            },
            Direction::Down => self.remaining_at(now).map_or(false, |r| r > 0.0),
        }
    }
}

/// Count the digits after the decimal point in the shortest representation
/// of `value`
fn decimal_digits(value: f64) -> usize {
    if value.fract() == 0.0 {
        return 0;
    }
    value
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn timer(duration: f64) -> TimerState {
        TimerState::new(TimerOptions::with_duration(duration))
    }

    #[test]
    fn precision_is_inferred_from_duration() {
        assert_eq!(timer(12.0).precision(), 0);
        assert_eq!(timer(15.4).precision(), 1);
        assert_eq!(timer(120.45).precision(), 2);
    }

    #[test]
    fn precision_override_wins() {
        let greater = TimerOptions::with_duration(12.5).merge(TimerOptions {
            precision: Some(3),
            ..TimerOptions::default()
        });
        assert_eq!(TimerState::new(greater).precision(), 3);

        let lesser = TimerOptions::with_duration(12.5).merge(TimerOptions {
            precision: Some(0),
            ..TimerOptions::default()
        });
        assert_eq!(TimerState::new(lesser).precision(), 0);
    }

    #[test]
    fn duration_precision_takes_the_larger_value() {
        let options = TimerOptions {
            duration: Some(12.25),
            precision: Some(1),
            ..TimerOptions::default()
        };
        let state = TimerState::new(options);
        assert_eq!(state.precision(), 1);
        assert_eq!(state.duration_precision(), 2);
        assert_eq!(state.duration_clock(None).as_deref(), Some("00:00:12.25"));
    }

    #[test]
    fn precision_without_duration_uses_defaults() {
        let defaults = Defaults {
            precision: 2,
            ..Defaults::default()
        };
        let state = TimerState::with_defaults(TimerOptions::default(), defaults);
        assert_eq!(state.precision(), 2);
        assert_eq!(state.duration_precision(), 0);
    }

    #[test]
    fn elapsed_is_zero_before_start() {
        let state = timer(30.0);
        assert!(!state.started());
        assert_eq!(state.elapsed(), 0.0);
        assert_eq!(state.remaining(), Some(30.0));
        assert_eq!(state.elapsed_clock(None), "00:00:00");
    }

    #[test]
    fn elapsed_is_clamped_to_duration() {
        let mut state = timer(30.0);
        let start = Instant::now();
        state.start_at(start).unwrap();

        let later = start + Duration::from_secs(10);
        assert_eq!(state.elapsed_at(later), 10.0);
        assert_eq!(state.remaining_at(later), Some(20.0));

        let much_later = start + Duration::from_secs(3600);
        assert_eq!(state.elapsed_at(much_later), 30.0);
        assert_eq!(state.remaining_at(much_later), Some(0.0));
        assert_eq!(state.remaining_clock_at(much_later, None).as_deref(), Some("00:00:00"));
    }

    #[test]
    fn elapsed_before_start_instant_is_zero() {
        let mut state = timer(30.0);
        let start = Instant::now() + Duration::from_secs(5);
        state.start_at(start).unwrap();
        assert_eq!(state.elapsed_at(Instant::now()), 0.0);
    }

    #[test]
    fn stopwatch_without_duration_is_unbounded() {
        let mut state = TimerState::new(TimerOptions {
            direction: Some(Direction::Up),
            ..TimerOptions::default()
        });
        let start = Instant::now();
        state.start_at(start).unwrap();

        let later = start + Duration::from_secs(7200);
        assert_eq!(state.elapsed_at(later), 7200.0);
        assert_eq!(state.remaining_at(later), None);
        assert_eq!(state.duration_clock(None), None);
        assert!(state.should_continue_at(later));
    }

    #[test]
    fn countdown_without_duration_fails_to_start() {
        let mut state = TimerState::new(TimerOptions::default());
        assert_eq!(state.start(), Err(TimerError::MissingDuration));
        assert!(!state.started());
    }

    #[test]
    fn should_continue_until_duration_is_reached() {
        for direction in [Direction::Up, Direction::Down] {
            let mut state = TimerState::new(TimerOptions {
                duration: Some(5.0),
                direction: Some(direction),
                ..TimerOptions::default()
            });
            let start = Instant::now();
            state.start_at(start).unwrap();
            assert!(state.should_continue_at(start + Duration::from_secs(4)));
            assert!(!state.should_continue_at(start + Duration::from_secs(5)));
        }
    }

    #[test]
    fn restart_resets_origin() {
        let mut state = timer(60.0);
        let first = Instant::now();
        state.start_at(first).unwrap();
        let second = first + Duration::from_secs(20);
        state.start_at(second).unwrap();
        assert_eq!(state.elapsed_at(second + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn snapshot_round_trips_without_start_instant() {
        let mut state = TimerState::new(TimerOptions {
            duration: Some(95.5),
            direction: Some(Direction::Up),
            name: Some("pasta".to_string()),
            sound: Some(false),
            display: Some(DisplayMode::Simple),
            precision: Some(2),
        });
        state.start().unwrap();

        let restored = TimerState::from_json(&state.to_json().unwrap()).unwrap();
        assert!(!restored.started());
        assert_eq!(restored.snapshot(), state.snapshot());
        assert_eq!(restored.name(), Some("pasta"));
        assert_eq!(restored.display_mode(), DisplayMode::Simple);
    }

    #[test]
    fn queries_honour_the_format_selector() {
        let mut state = timer(90.5);
        let start = Instant::now();
        state.start_at(start).unwrap();
        let later = start + Duration::from_secs(30);

        assert_eq!(state.elapsed_as_at(later, TimeFormat::Seconds, None), "30");
        assert_eq!(state.elapsed_as_at(later, TimeFormat::Clock, None), "00:00:30.0");
        assert_eq!(
            state.remaining_as_at(later, TimeFormat::Seconds, None).as_deref(),
            Some("60.5")
        );
        assert_eq!(
            state.remaining_as_at(later, TimeFormat::Clock, Some(2)).as_deref(),
            Some("00:01:00.50")
        );
        assert_eq!(state.duration_as(TimeFormat::Seconds, None).as_deref(), Some("90.5"));
        assert_eq!(state.duration_as(TimeFormat::Clock, None).as_deref(), Some("00:01:30.5"));
    }

    #[test]
    fn encode_and_decode_failures_are_distinct() {
        let encode = TimerError::Encode("bad value".to_string());
        let decode = TimerError::Decode("bad value".to_string());
        assert_ne!(encode, decode);
        assert!(encode.to_string().contains("encoded"));
        assert!(decode.to_string().contains("decoded"));
        assert!(timer(1.5).to_json().is_ok());
    }

    #[test]
    fn malformed_snapshot_is_rejected() {
        assert!(matches!(
            TimerState::from_json("{not json"),
            Err(TimerError::Decode(_))
        ));
    }
}
