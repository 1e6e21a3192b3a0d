//! CLI module for the Make scenario builder
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server with the install form and scenario API
//! - `build`: build a scenario document from a JSON step list

pub mod build;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Make scenario builder - chains HTTP modules for AI API integrations
#[derive(Parser)]
#[command(name = "make-scenario-builder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Build a scenario document and print it to stdout
    Build(build::BuildArgs),
}

/// Load configuration and initialize logging
///
/// A configuration that fails to load falls back to defaults and is reported
/// once logging is up.
pub(crate) fn init_config() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, error) = config_or_default(AppConfig::load());
    logging::init_logging(&config.logging);

    if let Some(error) = error {
        warn!(error = %error, "Failed to load configuration, using defaults");
    }

    config
}

fn config_or_default(
    loaded: Result<AppConfig, config::ConfigError>,
) -> (AppConfig, Option<config::ConfigError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(error) => (AppConfig::default(), Some(error)),
    }
}
