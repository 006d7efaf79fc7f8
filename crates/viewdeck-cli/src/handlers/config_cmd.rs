use std::path::Path;

use anyhow::Result;

use viewdeck_runtime::Config;

use crate::args::OutputFormat;
use crate::commands::effective_config;

pub fn init(path: &Path, site: &str, list: &str) -> Result<()> {
    let config = Config::new(site, list);
    config.validate()?;
    config.save_to(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

pub fn show(
    path: &Path,
    site: Option<String>,
    list: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let config = effective_config(path, site, list)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Plain => {
            println!("site_url:   {}", config.site_url);
            if config.list_title.is_empty() {
                println!("list_title: (not configured)");
            } else {
                println!("list_title: {}", config.list_title);
            }
        }
    }
    Ok(())
}
