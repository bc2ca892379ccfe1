//! Duration text parsing
//!
//! Two notations are accepted:
//!
//! - unit notation, `#h#m#s`, e.g. `1h30m`, `4.5h`, `3hm1s`
//! - clock notation, `##:##:##`, e.g. `01:30:00`, `5::6.5`, `54`
//!
//! Unit notation is tried first; clock notation only sees the input when the
//! unit recognizer rejects it.

use tracing::debug;

const SECONDS_PER_MINUTE: f64 = 60.0;
const MAX_CLOCK_FIELDS: usize = 3;

/// Parse a duration in unit or clock notation into seconds.
///
/// Returns `None` when the text matches neither notation.
pub fn parse_duration(text: &str) -> Option<f64> {
    if text.is_empty() {
        debug!("Duration is empty");
        return None;
    }

    if let Some(seconds) = parse_unit_notation(text) {
        debug!("Duration {:?} matched unit format: {}s", text, seconds);
        return Some(seconds);
    }

    if let Some(seconds) = parse_clock_notation(text) {
        debug!("Duration {:?} matched clock format: {}s", text, seconds);
        return Some(seconds);
    }

    debug!("Duration {:?} did not match any format", text);
    None
}

/// Recognize `#h#m#s` notation.
///
/// Letters may repeat and are summed per unit. A literal left over after the
/// last unit letter counts as seconds.
fn parse_unit_notation(text: &str) -> Option<f64> {
    let mut hours = 0.0;
    let mut minutes = 0.0;
    let mut seconds: Vec<f64> = Vec::new();
    let mut literal_start = 0;
    let mut has_unit = false;

    for (idx, ch) in text.char_indices() {
        match ch.to_ascii_lowercase() {
            '0'..='9' | '.' => {}
            unit @ ('h' | 'm' | 's') => {
                let value = unit_literal(&text[literal_start..idx])?;
                match unit {
                    'h' => hours += value,
                    'm' => minutes += value,
                    _ => seconds.push(value),
                }
                has_unit = true;
                literal_start = idx + ch.len_utf8();
            }
            _ => return None,
        }
    }

    if !has_unit {
        return None;
    }

    let trailing = &text[literal_start..];
    if !trailing.is_empty() {
        seconds.push(unit_literal(trailing)?);
    }

    let total = hours * SECONDS_PER_MINUTE * SECONDS_PER_MINUTE + minutes * SECONDS_PER_MINUTE;
    Some(seconds.into_iter().fold(total, |acc, value| acc + value))
}

/// Recognize `##:##:##` notation, including a bare seconds value.
fn parse_clock_notation(text: &str) -> Option<f64> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() > MAX_CLOCK_FIELDS {
        return None;
    }

    let mut seconds = 0.0;
    let mut multiplier = 1.0;
    for field in fields.iter().rev() {
        seconds += multiplier * clock_field(field)?;
        multiplier *= SECONDS_PER_MINUTE;
    }
    Some(seconds)
}

/// Split a decimal literal into its whole and fractional digit runs.
///
/// Only ASCII digits and at most one `.` are allowed.
fn split_literal(literal: &str) -> Option<(&str, &str)> {
    if !literal.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    match literal.split_once('.') {
        Some((_, fraction)) if fraction.contains('.') => None,
        Some((whole, fraction)) => Some((whole, fraction)),
        None => Some((literal, "")),
    }
}

/// Value of the number in front of a unit letter. Empty means zero.
fn unit_literal(literal: &str) -> Option<f64> {
    let (whole, fraction) = split_literal(literal)?;
    if whole.is_empty() && fraction.is_empty() {
        return Some(0.0);
    }
    let whole = if whole.is_empty() { "0" } else { whole };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    format!("{}.{}", whole, fraction).parse().ok()
}

/// Value of one clock field: whole part plus fractional part. Empty means zero.
fn clock_field(field: &str) -> Option<f64> {
    let (whole, fraction) = split_literal(field)?;
    let mut value = 0.0;
    if !whole.is_empty() {
        value += whole.parse::<f64>().ok()?;
    }
    if !fraction.is_empty() {
        value += format!("0.{}", fraction).parse::<f64>().ok()?;
    }
    Some(value)
}
