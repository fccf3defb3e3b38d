//! Headless terminal binary for the Idlepet simulation.
//!
//! Wires the game controller to a JSON save file, a wall clock, and a
//! line-oriented terminal. It loads configuration, restores the saved
//! game (with offline catch-up), and drives the tick loop until the
//! player quits, stdin closes, or Ctrl-C arrives.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `idlepet-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Open the save file and restore the game
//! 4. Register the logging observer
//! 5. Run the driver loop
//! 6. Save and log the exit reason

mod command;
mod driver;
mod error;
mod log_observer;

use std::path::Path;

use idlepet_core::{GameConfig, GameController, LoggingConfig, StateStore, SystemClock};
use idlepet_store::JsonFileStore;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::command::USAGE;
use crate::driver::Driver;
use crate::error::EngineError;
use crate::log_observer::LogObserver;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "idlepet-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal
/// cannot be read or written.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging depends on it, so report later.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("idlepet-engine starting");
    if from_file {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }

    // 3. Restore the game.
    let GameConfig {
        economy,
        driver: driver_config,
        ..
    } = config;
    let store = JsonFileStore::new(&driver_config.save_path);
    info!(path = %store.path().display(), "Opening save file");
    let record = store.load();
    let mut controller = GameController::restore(record, economy, Box::new(SystemClock));

    // 4. Observe.
    controller.subscribe(LogObserver);

    // 5. Run.
    let driver = Driver::new(controller, store, driver_config);
    greet(&driver);
    let input = BufReader::new(tokio::io::stdin());
    let reason = driver.run(input, std::io::stdout(), shutdown_signal()).await?;

    // 6. Done.
    info!(?reason, "idlepet-engine shutdown complete");
    Ok(())
}

/// Load configuration from `idlepet-config.yaml`, or defaults when the
/// file does not exist. The flag reports whether the file was read.
fn load_config() -> Result<(GameConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((GameConfig::from_file(config_path)?, true))
    } else {
        let mut config = GameConfig::default();
        config.apply_env_overrides();
        Ok((config, false))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn greet<S: StateStore>(driver: &Driver<S>) {
    let state = driver.controller().state();
    println!("{} is awake (level {}).", state.pet_name, state.level);
    if let Some(report) = driver.controller().offline_report() {
        println!(
            "While you were away ({}s{}), {} earned {:.1} coins.",
            report.elapsed_ms / 1000,
            if report.capped { ", capped" } else { "" },
            state.pet_name,
            report.coins_gained
        );
    }
    println!("{USAGE}");
}

/// Resolves on Ctrl-C. If the handler cannot be installed the game
/// simply runs until `quit` or end of input.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
