//! Table rendering for the saved timer listing

use crate::state::{TimerOptions, TimerState};

const HEADERS: [&str; 3] = ["Name", "Duration", "Options"];

/// Comma separated summary of the options a saved timer sets
pub fn describe_options(options: &TimerOptions) -> String {
    let mut entries = Vec::new();
    if let Some(direction) = options.direction {
        entries.push(direction.to_string());
    }
    if let Some(sound) = options.sound {
        entries.push(if sound { "sound" } else { "no sound" }.to_string());
    }
    if let Some(display) = options.display {
        entries.push(display.to_string());
    }
    if let Some(precision) = options.precision {
        entries.push(format!("precision {}", precision));
    }
    entries.join(", ")
}

/// Render saved timers as a bordered table
pub fn timer_table(timers: &[(String, TimerOptions)]) -> String {
    let mut rows: Vec<[String; 3]> = vec![HEADERS.map(str::to_string)];
    for (name, options) in timers {
        let duration = TimerState::new(options.clone())
            .duration_clock(None)
            .unwrap_or_default();
        rows.push([name.clone(), duration, describe_options(options)]);
    }

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect();
            format!("| {} |", cells.join(" | "))
        })
        .collect();

    let rule_len = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = Vec::with_capacity(lines.len() + 1);
    out.push(lines[0].clone());
    out.push("*".repeat(rule_len));
    out.extend(lines.into_iter().skip(1));
    out.join("\n")
}
