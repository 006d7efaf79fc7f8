use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Runtime configuration for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Absolute URL of the site the library lives in
    pub site_url: String,

    /// Title of the document library to aggregate
    pub list_title: String,
}

impl Config {
    pub fn new(site_url: impl Into<String>, list_title: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            list_title: list_title.into(),
        }
    }

    /// Loads configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks the site URL is usable. A blank list title is allowed: it is
    /// the "not configured" state and builds an empty catalog.
    pub fn validate(&self) -> Result<()> {
        if self.site_url.trim().is_empty() {
            return Err(Error::Config("site_url must not be empty".to_string()));
        }
        Ok(())
    }
}
