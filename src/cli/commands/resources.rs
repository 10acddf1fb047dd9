//! Resources command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("resources")
        .about("List resources known to the registry")
        .arg(utils::config_arg())
        .arg(utils::registry_arg())
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = utils::load_config(matches)?;
    utils::apply_registry_overrides(&mut config, matches);

    let app = utils::create_app(config)?;
    let resources = app.resources();

    if resources.is_empty() {
        println!("No resources found.");
        return Ok(());
    }

    for gvr in resources {
        println!("{gvr}");
    }

    Ok(())
}
