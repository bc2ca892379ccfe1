//! CLI command module
//!
//! This module maps the parsed command line onto timer, storage and display
//! operations.

pub mod handlers;
pub mod table;

use tracing::debug;

use crate::{
    config::{Config, DURATION_HELP},
    storage::Repository,
    tasks::run_display,
    utils::{confirm, shutdown_signal},
};
use handlers::*;

/// Run the action selected on the command line
pub async fn execute(config: &Config) -> anyhow::Result<()> {
    if config.help_duration {
        println!("{}", DURATION_HELP);
        return Ok(());
    }

    let repo = match &config.config {
        Some(path) => Repository::open(path),
        None => Repository::open(Repository::default_path()?),
    };
    debug!("Using timer store {}", repo.path().display());

    if config.list {
        println!("{}", list_timers(&repo));
        return Ok(());
    }

    if let Some(name) = &config.remove {
        println!("{}", remove_timer(&repo, name)?);
        return Ok(());
    }

    if config.set_defaults {
        println!("{}", update_defaults(&repo, config)?);
        return Ok(());
    }

    let ResolvedTimer { mut timer, notice } = resolve_timer(&repo, config)?;
    if let Some(notice) = notice {
        println!("{}", notice);
    }

    let confirm_overwrite =
        |name: &str| confirm(&format!("Timer {} already exists. Overwrite?(Y/n)", name));
    if handle_save(&repo, config, &timer, confirm_overwrite)? == SaveOutcome::Stop {
        return Ok(());
    }

    timer.start()?;
    run_display(&timer, shutdown_signal()).await?;
    Ok(())
}
