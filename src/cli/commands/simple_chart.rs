//! simple-chart command implementation

use crate::cli::utils;
use crate::GroupVersionResource;
use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("simple-chart")
        .about("Generate simple chart")
        .arg(utils::config_arg())
        .arg(utils::registry_arg())
        .arg(
            Arg::new("chart-dir")
                .long("chart-dir")
                .help("Charts dir")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("resource.group")
                .long("resource.group")
                .help("Resource api group")
                .value_name("GROUP"),
        )
        .arg(
            Arg::new("resource.version")
                .long("resource.version")
                .help("Resource api version")
                .value_name("VERSION")
                .required(true),
        )
        .arg(
            Arg::new("resource.name")
                .long("resource.name")
                .help("Resource plural")
                .value_name("NAME")
                .required(true),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let gvr = gvr_from_matches(matches);
    info!("Starting editor chart generation for {}", gvr);

    let mut config = utils::load_config(matches)?;
    utils::apply_registry_overrides(&mut config, matches);

    let chart_dir = matches.get_one::<String>("chart-dir").map(PathBuf::from);

    let app = utils::create_app(config)?;
    let chart = app.generate(&gvr, chart_dir.as_deref())?;

    println!("Chart {} generated at {}", chart.chart_name, chart.chart_path.display());
    println!("Files generated: {}", chart.files_generated());
    if let Some(crd_path) = &chart.crd_path {
        println!("CRD manifest: {}", crd_path.display());
    }

    Ok(())
}

fn gvr_from_matches(matches: &ArgMatches) -> GroupVersionResource {
    let value = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();

    GroupVersionResource::new(
        value("resource.group"),
        value("resource.version"),
        value("resource.name"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let matches = command()
            .try_get_matches_from([
                "simple-chart",
                "--chart-dir",
                "/tmp/charts",
                "--resource.group",
                "example.io",
                "--resource.version",
                "v1",
                "--resource.name",
                "widgets",
            ])
            .unwrap();

        assert_eq!(
            gvr_from_matches(&matches),
            GroupVersionResource::new("example.io", "v1", "widgets")
        );
        assert_eq!(
            matches.get_one::<String>("chart-dir").map(String::as_str),
            Some("/tmp/charts")
        );
    }

    #[test]
    fn test_group_defaults_to_core() {
        let matches = command()
            .try_get_matches_from([
                "simple-chart",
                "--resource.version",
                "v1",
                "--resource.name",
                "pods",
            ])
            .unwrap();

        assert_eq!(gvr_from_matches(&matches).group, "");
    }

    #[test]
    fn test_version_is_required() {
        let result = command().try_get_matches_from(["simple-chart", "--resource.name", "pods"]);
        assert!(result.is_err());
    }
}
