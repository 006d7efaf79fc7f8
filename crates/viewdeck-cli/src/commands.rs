use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use viewdeck_providers::FixtureHost;
use viewdeck_runtime::Config;

use crate::args::{Cli, Commands, ConfigCommand};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        fixture,
        config,
        site,
        list,
        format,
        command,
    } = cli;
    let config_path = config.unwrap_or_else(|| PathBuf::from("viewdeck.toml"));

    match command {
        Commands::Classify { title } => handlers::classify::handle(&title, format),

        Commands::Config { command } => match command {
            ConfigCommand::Init { site, list } => {
                handlers::config_cmd::init(&config_path, &site, &list)
            }
            ConfigCommand::Show => handlers::config_cmd::show(&config_path, site, list, format),
        },

        Commands::Show => {
            let service = open_service(fixture)?;
            let config = effective_config(&config_path, site, list)?;
            runtime()?.block_on(handlers::show::handle(service, config, format))
        }

        Commands::Expand { tile_id } => {
            let service = open_service(fixture)?;
            let config = effective_config(&config_path, site, list)?;
            runtime()?.block_on(handlers::expand::handle(service, config, &tile_id, format))
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn open_service(fixture: Option<PathBuf>) -> Result<FixtureHost> {
    let path =
        fixture.context("No list host given. Pass --fixture <file> with the site's data.")?;
    FixtureHost::load(&path)
}

/// Config file plus overrides. Precedence: command line, then the
/// VIEWDECK_SITE / VIEWDECK_LIST environment, then the file.
pub(crate) fn effective_config(
    path: &Path,
    site: Option<String>,
    list: Option<String>,
) -> Result<Config> {
    let base = if path.exists() {
        Some(Config::load_from(path)?)
    } else {
        None
    };

    let site = site
        .or_else(|| std::env::var("VIEWDECK_SITE").ok())
        .or_else(|| base.as_ref().map(|c| c.site_url.clone()));
    let list = list
        .or_else(|| std::env::var("VIEWDECK_LIST").ok())
        .or_else(|| base.as_ref().map(|c| c.list_title.clone()));

    match site {
        Some(site) => Ok(Config::new(site, list.unwrap_or_default())),
        None => anyhow::bail!(
            "No configuration found. Run 'viewdeck config init' or pass --site/--list."
        ),
    }
}
