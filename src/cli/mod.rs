//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("editor-chart-gen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generate Helm editor charts for Kubernetes resource types")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(commands::simple_chart::command())
            .subcommand(commands::init::command())
            .subcommand(commands::resources::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("simple-chart", sub_matches)) => commands::simple_chart::run(sub_matches).await,
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("resources", sub_matches)) => commands::resources::run(sub_matches).await,
            _ => unreachable!("subcommand is required"),
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::Result;
    use clap::{Arg, ArgAction, ArgMatches};
    use std::path::PathBuf;
    use tracing::{debug, info};

    /// `--config` argument shared by commands that read configuration
    pub fn config_arg() -> Arg {
        Arg::new("config")
            .short('c')
            .long("config")
            .help("Configuration file path")
            .value_name("FILE")
    }

    /// `--registry` argument shared by commands that read the registry
    pub fn registry_arg() -> Arg {
        Arg::new("registry")
            .long("registry")
            .help("Directory of resource descriptors or CRD manifests (repeatable)")
            .value_name("DIR")
            .action(ArgAction::Append)
    }

    /// Load configuration from `--config`, a default location, or built-in defaults
    pub fn load_config(matches: &ArgMatches) -> Result<crate::Config> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return crate::Config::from_file(&PathBuf::from(config_path));
        }

        match crate::utils::find_default_config() {
            Some(path) => {
                info!("Using configuration file {:?}", path);
                crate::Config::from_file(&path)
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(crate::Config::default())
            }
        }
    }

    /// Apply `--registry` overrides on top of the loaded configuration
    pub fn apply_registry_overrides(config: &mut crate::Config, matches: &ArgMatches) {
        if let Some(paths) = matches.get_many::<String>("registry") {
            config.registry.paths = paths.map(PathBuf::from).collect();
        }
    }

    /// Create EditorChartGen instance
    pub fn create_app(config: crate::Config) -> Result<crate::EditorChartGen> {
        Ok(crate::EditorChartGen::new(config)?)
    }

}
