//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `forecast_api` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use forecast_api::initialization::init_logger_with;
use forecast_api::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // .env values become defaults for the env-backed CLI options
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("forecast_api: ignoring unreadable .env file: {}", e);
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        log::error!("forecast_api error: {:#}", e);
        eprintln!("forecast_api error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
