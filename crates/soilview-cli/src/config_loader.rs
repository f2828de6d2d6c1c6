//! Configuration loading for CLI commands

use anyhow::{Context, Result};
use soilview_core::config::{CliConfigOverrides, LayeredConfig};

use crate::cli::Cli;

/// Defaults, then the optional file, then the environment, then CLI flags
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = &cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config
        .update_from_cli(CliConfigOverrides {
            variant: cli.variant,
            canvas: cli.canvas.clone(),
        })
        .context("Invalid command-line configuration")?;

    Ok(config)
}
