//! stimer - A command-line countdown timer and stopwatch
//!
//! This is the main entry point for the stimer application.

use tracing::{debug, error};

use stimer::{commands::execute, config::Config};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Logs go to stderr so they never tear the live display line
    tracing_subscriber::fmt()
        .with_env_filter(format!("stimer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!("Starting stimer v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = execute(&config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
