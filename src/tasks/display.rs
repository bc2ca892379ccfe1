//! Live terminal display of a running timer

use std::{
    future::Future,
    io::{self, Write},
    time::{Duration, Instant},
};

use chrono::{Local, TimeDelta};
use tokio::time::interval;
use tracing::{debug, info};

use crate::{
    clock::TimeFormat,
    state::{Direction, DisplayMode, TimerError, TimerState},
};

/// How often the status line is redrawn
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(50);
/// How often the alarm bell rings once the timer is done
pub const ALARM_INTERVAL: Duration = Duration::from_millis(500);
/// Width of the progress bar in characters
pub const BAR_WIDTH: usize = 40;

const BAR_MARKER: char = '\u{2588}';

/// Which widgets make up the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLayout {
    pub direction: Direction,
    pub progress_bar: bool,
    pub elapsed: bool,
    pub remaining: bool,
}

impl DisplayLayout {
    pub fn new(mode: DisplayMode, direction: Direction) -> Self {
        match mode {
            DisplayMode::Full => Self {
                direction,
                progress_bar: true,
                elapsed: true,
                remaining: true,
            },
            DisplayMode::Simple => Self {
                direction,
                progress_bar: false,
                elapsed: direction == Direction::Up,
                remaining: direction == Direction::Down,
            },
        }
    }

    pub fn for_timer(timer: &TimerState) -> Self {
        Self::new(timer.display_mode(), timer.direction())
    }
}

/// Render a bar filled to `fraction` of `width`
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (fraction * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push(' ');
    bar.extend(std::iter::repeat(BAR_MARKER).take(filled));
    bar.extend(std::iter::repeat(' ').take(width - filled));
    bar.push(' ');
    bar
}

/// Compose the status line for `timer` as of `now`
pub fn status_line(timer: &TimerState, layout: &DisplayLayout, now: Instant) -> String {
    let elapsed = layout
        .elapsed
        .then(|| timer.elapsed_as_at(now, TimeFormat::Clock, None));
    let remaining = if layout.remaining {
        timer.remaining_as_at(now, TimeFormat::Clock, None)
    } else {
        None
    };

    let bar = match (layout.progress_bar, timer.duration()) {
        (true, Some(duration)) if duration > 0.0 => {
            let value = match layout.direction {
                Direction::Up => timer.elapsed_at(now),
                Direction::Down => timer.remaining_at(now).unwrap_or(0.0),
            };
            Some(progress_bar(value / duration, BAR_WIDTH))
        }
        (true, Some(_)) => Some(progress_bar(1.0, BAR_WIDTH)),
        _ => None,
    };

    let (left, right) = match layout.direction {
        Direction::Up => (elapsed, remaining),
        Direction::Down => (remaining, elapsed),
    };

    let mut line = String::new();
    if let Some(left) = left {
        line.push_str(&left);
    }
    match bar {
        Some(bar) => line.push_str(&bar),
        None if right.is_some() && !line.is_empty() => line.push(' '),
        None => {}
    }
    if let Some(right) = right {
        line.push_str(&right);
    }
    line
}

/// Status line for `now` and whether another frame follows it
pub fn frame(timer: &TimerState, layout: &DisplayLayout, now: Instant) -> (String, bool) {
    (status_line(timer, layout, now), timer.should_continue_at(now))
}

/// Header announcing the timer, with local start and end times
pub fn header(timer: &TimerState) -> String {
    let started = Local::now();
    match timer.duration_clock(None) {
        Some(duration) => {
            let ends = timer
                .duration()
                .and_then(|d| TimeDelta::try_milliseconds((d * 1000.0) as i64))
                .and_then(|delta| started.checked_add_signed(delta));
            match ends {
                Some(ends) => format!(
                    "Timer started with duration {} (at {}, ends {})",
                    duration,
                    started.format("%H:%M:%S"),
                    ends.format("%H:%M:%S")
                ),
                None => format!("Timer started with duration {}", duration),
            }
        }
        None => format!("Timer started: (at {})", started.format("%H:%M:%S")),
    }
}

/// Drive the display until the timer finishes or `shutdown` resolves.
///
/// Rings the alarm after completion when the timer has sound enabled.
pub async fn run_display<S>(timer: &TimerState, shutdown: S) -> Result<(), TimerError>
where
    S: Future<Output = ()>,
{
    if !timer.started() {
        return Err(TimerError::NotStarted);
    }

    tokio::pin!(shutdown);
    let layout = DisplayLayout::for_timer(timer);
    let mut stdout = io::stdout();
    debug!("Display layout: {:?}", layout);

    println!("{}", header(timer));

    let mut refresh = interval(REFRESH_INTERVAL);
    loop {
        tokio::select! {
            _ = refresh.tick() => {
                let (line, more) = frame(timer, &layout, Instant::now());
                draw(&mut stdout, &line);
                if !more {
                    break;
                }
            }
            _ = &mut shutdown => {
                info!("Display interrupted before the timer finished");
                println!();
                return Ok(());
            }
        }
    }
    println!();

    if !timer.sound() {
        println!("Time's up!");
        return Ok(());
    }

    print!("Time's up! Control + C to exit.");
    let mut alarm = interval(ALARM_INTERVAL);
    loop {
        tokio::select! {
            _ = alarm.tick() => {
                draw_raw(&mut stdout, "\x07");
            }
            _ = &mut shutdown => {
                println!();
                return Ok(());
            }
        }
    }
}

fn draw(out: &mut impl Write, line: &str) {
    draw_raw(out, &format!("\r{}\x1b[K", line));
}

fn draw_raw(out: &mut impl Write, text: &str) {
    // Terminal write failures are not fatal to the timer
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        debug!("Failed to write to terminal: {}", e);
    }
}
