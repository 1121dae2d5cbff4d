pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::store::DiskStore;
use anyhow::Result;
use tracing::{debug, info};

/// Top-level application commands, decoupled from the clap surface so the
/// integration tests can drive the app without a terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Total,
    Calc,
    Quote { save_key: Option<String> },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("aurum starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Total => cli::total::run(&config),
        AppCommand::Calc => {
            let store = DiskStore::open(&config.default_data_path()?)?;
            cli::calc::run(&config, &store).await
        }
        AppCommand::Quote { save_key } => {
            let store = DiskStore::open(&config.default_data_path()?)?;
            cli::quote::run(&config, &store, save_key).await
        }
    }
}
