//! Command implementations

mod config;
mod run;
mod sample;
mod views;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Run(args) => run::execute(args, &config, &output),
        Commands::Views => views::execute(&config, &output),
        Commands::Sample => sample::execute(&config, &output),
        Commands::Config => config::execute(&config, &output),
    }
}
