//! Logitech Gaming SDK driver CLI
//!
//! A command-line interface for the LED and Arx Control SDKs.

use clap::Parser;
use tracing::debug;

// CLI definitions
mod cli;
use cli::{Cli, Commands};

// Command handlers
mod commands;

use logi_driver::DriverConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(DriverConfig::default_path);
    let config = DriverConfig::load(&config_path)?
        .with_overrides(cli.led_library.clone(), cli.arx_library.clone());

    // Initialize logging: RUST_LOG wins over the config file
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(logi_driver::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    debug!("Config from {:?}: {:?}", config_path, config);

    match cli.command {
        Commands::Locate => commands::utility::locate_libraries(&config)?,
        Commands::Keys { g_keys } => commands::utility::keys(g_keys)?,
        Commands::Color { color } => commands::utility::color(&color)?,
        Commands::Led(command) => commands::led::run(&config, command)?,
        Commands::Arx(command) => commands::arx::run(&config, command)?,
        Commands::Config(command) => commands::utility::config(command, &config_path, &config)?,
    }

    Ok(())
}
