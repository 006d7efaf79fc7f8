use std::sync::Arc;

use anyhow::Result;

use viewdeck_providers::FixtureHost;
use viewdeck_runtime::{Config, Dashboard, TileToggle};

use crate::args::OutputFormat;
use crate::output;

pub async fn handle(
    service: FixtureHost,
    config: Config,
    tile_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let site_url = config.site_url.clone();
    let dashboard = Dashboard::new(Arc::new(service), config);
    dashboard.reload().await?;

    match dashboard.toggle_tile(tile_id).await {
        TileToggle::Expanded => {
            let views = dashboard.tile_views(tile_id);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&views)?),
                OutputFormat::Plain => {
                    if views.is_empty() {
                        println!("No views under '{}'", tile_id);
                    } else {
                        output::print_views(&site_url, &views);
                    }
                }
            }
            Ok(())
        }
        TileToggle::Ignored => anyhow::bail!(
            "'{}' is not a summary tile; only summary tiles expand",
            tile_id
        ),
        // A one-shot CLI toggle cannot race itself, but the façade still
        // reports these outcomes.
        TileToggle::Collapsed | TileToggle::Superseded => Ok(()),
    }
}
