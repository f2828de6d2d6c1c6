use clap::{Parser, Subcommand};
use soilview_core::models::Variant;
use std::path::PathBuf;

/// SoilView - Soil nutrient analysis screens in the terminal
#[derive(Parser, Debug)]
#[command(name = "soilview")]
#[command(about = "Soil nutrient analysis screens in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// UI variant to run (basic, portal, or dashboard)
    #[arg(long, global = true, value_parser = parse_variant_arg)]
    pub variant: Option<Variant>,

    /// Canvas the nutrient chart is bound to
    #[arg(long, global = true)]
    pub canvas: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session
    Run(RunArgs),

    /// List the views of the configured variant
    Views,

    /// Show the soil sample baked into the configured variant
    Sample,

    /// Show effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Start with a logged-in session
    #[arg(long)]
    pub logged_in: bool,

    /// View to open first, e.g. reports or /dashboard
    #[arg(long)]
    pub open: Option<String>,
}

fn parse_variant_arg(s: &str) -> Result<Variant, String> {
    s.parse::<Variant>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["soilview", "views", "--variant", "portal", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.variant, Some(Variant::Portal));
        assert!(matches!(cli.command, Commands::Views));
    }

    #[test]
    fn test_run_args() {
        let cli = Cli::parse_from(["soilview", "run", "--logged-in", "--open", "dashboard"]);
        match cli.command {
            Commands::Run(args) => {
                assert!(args.logged_in);
                assert_eq!(args.open.as_deref(), Some("dashboard"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["soilview", "views", "--variant", "tabs"]).is_err());
    }
}
