use anyhow::Result;

use viewdeck_providers::FixtureHost;
use viewdeck_runtime::{Config, build_catalog};

use crate::args::OutputFormat;
use crate::output;

pub async fn handle(service: FixtureHost, config: Config, format: OutputFormat) -> Result<()> {
    let catalog = build_catalog(&service, &config.site_url, &config.list_title, 1).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
        OutputFormat::Plain => output::print_catalog(&catalog),
    }
    Ok(())
}
