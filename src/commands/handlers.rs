//! Command handlers for the CLI actions

use anyhow::{anyhow, Context};
use tracing::{info, warn};

use super::table::timer_table;
use crate::{
    config::Config,
    state::{Direction, TimerError, TimerOptions, TimerState},
    storage::{Repository, StorageError},
};

/// A timer ready to run, plus a notice for the user when its settings were
/// adjusted
#[derive(Debug)]
pub struct ResolvedTimer {
    pub timer: TimerState,
    pub notice: Option<String>,
}

/// Render the saved timer table
pub fn list_timers(repo: &Repository) -> String {
    timer_table(&repo.list())
}

/// Remove a saved timer and describe the outcome
pub fn remove_timer(repo: &Repository, name: &str) -> anyhow::Result<String> {
    let removed = repo
        .remove(name)
        .with_context(|| format!("Timer {} could not be removed", name))?;
    Ok(if removed {
        format!("Timer {} removed.", name)
    } else {
        format!("Timer {} not found.", name)
    })
}

/// Fold the command-line flags into the stored global defaults
pub fn update_defaults(repo: &Repository, config: &Config) -> anyhow::Result<String> {
    let defaults = repo.defaults().apply(&config.overrides()?);
    repo.set_defaults(defaults)
        .context("Defaults could not be saved")?;
    info!("Defaults updated in {}", repo.path().display());
    Ok(format!("Defaults saved: {}", defaults))
}

/// Build the timer described by the command line, on top of a saved timer
/// when `--timer` is given.
pub fn resolve_timer(repo: &Repository, config: &Config) -> anyhow::Result<ResolvedTimer> {
    let base = match &config.timer {
        Some(name) => repo
            .load(name)
            .ok_or_else(|| anyhow!("Timer {} not found.", name))?,
        None => TimerOptions::default(),
    };
    let mut options = base.merge(config.overrides()?);
    let defaults = repo.defaults();

    let mut notice = None;
    if options.duration.is_none() {
        let direction = options.direction.unwrap_or(defaults.direction);
        if config.down {
            return Err(TimerError::MissingDuration.into());
        }
        if direction == Direction::Down {
            info!("No duration given, switching to stopwatch mode");
            options.direction = Some(Direction::Up);
            notice = Some("No duration specified. Assuming \"UP\" (stopwatch) mode.".to_string());
        }
    }

    Ok(ResolvedTimer {
        timer: TimerState::with_defaults(options, defaults),
        notice,
    })
}

/// Save a timer, asking `confirm_overwrite` before replacing an existing
/// one. Returns the message to show, or `None` when the overwrite was
/// declined.
pub fn save_timer<F>(repo: &Repository, timer: &TimerState, confirm_overwrite: F) -> Result<Option<String>, StorageError>
where
    F: FnOnce(&str) -> bool,
{
    let saved = repo.save(&timer.snapshot(), confirm_overwrite)?;
    Ok(saved.map(|name| format!("Timer saved as: {}", name)))
}

/// Outcome of the save step
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Continue to run the timer
    Proceed,
    /// Stop without running
    Stop,
}

/// Run the save step of `--save` / `--save-only`
pub fn handle_save<F>(repo: &Repository, config: &Config, timer: &TimerState, confirm_overwrite: F) -> anyhow::Result<SaveOutcome>
where
    F: FnOnce(&str) -> bool,
{
    if !(config.save || config.save_only) {
        return Ok(SaveOutcome::Proceed);
    }

    match save_timer(repo, timer, confirm_overwrite) {
        Ok(Some(message)) => println!("{}", message),
        Ok(None) => return Ok(SaveOutcome::Stop),
        Err(e) if config.save_only => return Err(e).context("Timer could not be saved"),
        Err(e) => warn!("Timer could not be saved: {:#}", anyhow::Error::new(e)),
    }

    Ok(if config.save_only {
        SaveOutcome::Stop
    } else {
        SaveOutcome::Proceed
    })
}
