//! Clock-style rendering of second values

use std::fmt;

/// Output selector for time queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// Raw seconds, e.g. `90.5`
    #[default]
    Seconds,
    /// Clock string, e.g. `00:01:30.5`
    Clock,
}

/// Render seconds as `HH:MM:SS`, with `precision` fractional digits on the
/// seconds field when `precision > 0`.
///
/// Seconds are rounded to `precision` digits. A rounded value of 60 carries
/// into minutes, and 60 minutes carry into hours. Negative and non-finite
/// values render as zero.
pub fn render(seconds: f64, precision: usize) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 { seconds } else { 0.0 };

    let mut hours = (seconds / 60.0 / 60.0).trunc() as u64;
    let mut minutes = (seconds / 60.0 - 60.0 * hours as f64).trunc() as u64;
    let mut secs = format!("{:.*}", precision, seconds % 60.0);

    if secs.parse::<f64>().map_or(false, |value| value >= 60.0) {
        secs = format!("{:.*}", precision, 0.0);
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        hours += 1;
    }

    // "SS" plus "." and the fractional digits
    let width = if precision > 0 { precision + 3 } else { 2 };
    format!("{:02}:{:02}:{:0>width$}", hours, minutes, secs, width = width)
}

/// A seconds value that can be read raw or as a clock string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTime {
    seconds: f64,
}

impl ClockTime {
    pub fn new(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Clock string at the given precision (0 when unset)
    pub fn clock(&self, precision: Option<usize>) -> String {
        render(self.seconds, precision.unwrap_or(0))
    }

    /// Format according to the selector
    pub fn format(&self, format: TimeFormat, precision: Option<usize>) -> String {
        match format {
            TimeFormat::Seconds => self.seconds.to_string(),
            TimeFormat::Clock => self.clock(precision),
        }
    }
}

impl From<f64> for ClockTime {
    fn from(seconds: f64) -> Self {
        Self::new(seconds)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clock(f.precision()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_whole_values() {
        assert_eq!(render(24.0, 0), "00:00:24");
        assert_eq!(render(78.0, 0), "00:01:18");
        assert_eq!(render(5621.0, 0), "01:33:41");
    }

    #[test]
    fn renders_fractional_values() {
        assert_eq!(render(34.125, 3), "00:00:34.125");
        assert_eq!(render(82.133, 3), "00:01:22.133");
        assert_eq!(render(4599.55, 2), "01:16:39.55");
    }

    #[test]
    fn pads_fraction_to_precision() {
        assert_eq!(render(54.0, 4), "00:00:54.0000");
        assert_eq!(render(541.0, 2), "00:09:01.00");
        assert_eq!(render(16779.0, 5), "04:39:39.00000");
        assert_eq!(render(905.1, 4), "00:15:05.1000");
    }

    #[test]
    fn rounds_to_precision() {
        assert_eq!(render(22.554, 1), "00:00:22.6");
        assert_eq!(render(7880.16561, 3), "02:11:20.166");
        assert_eq!(render(12.6, 0), "00:00:13");
    }

    #[test]
    fn carries_rounded_seconds_into_minutes() {
        assert_eq!(render(59.96, 1), "00:01:00.0");
        assert_eq!(render(119.7, 0), "00:02:00");
    }

    #[test]
    fn carries_rounded_minutes_into_hours() {
        assert_eq!(render(3599.999, 2), "01:00:00.00");
        assert_eq!(render(7199.6, 0), "02:00:00");
    }

    #[test]
    fn clamps_negative_input() {
        assert_eq!(render(-3.0, 0), "00:00:00");
        assert_eq!(render(f64::NAN, 1), "00:00:00.0");
    }

    #[test]
    fn clock_time_display_uses_formatter_precision() {
        let time = ClockTime::new(90.25);
        assert_eq!(format!("{}", time), "00:01:30");
        assert_eq!(format!("{:.2}", time), "00:01:30.25");
        assert_eq!(time.format(TimeFormat::Seconds, None), "90.25");
    }
}
