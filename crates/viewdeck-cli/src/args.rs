use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "viewdeck")]
#[command(about = "Categorized dashboard of document-library views", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Fixture file serving as the list host.
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Config file naming the site and list. Defaults to ./viewdeck.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured site URL.
    #[arg(long, global = true)]
    pub site: Option<String>,

    /// Override the configured list title.
    #[arg(long, global = true)]
    pub list: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and print the catalog for the configured list.
    Show,

    /// Expand a summary tile and print its nested views.
    Expand {
        /// Tile id, e.g. "working-document" or "published-documents".
        tile_id: String,
    },

    /// Classify a view title without touching any service.
    Classify {
        title: String,
    },

    /// Manage the config file.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with the given site and list.
    Init {
        #[arg(long)]
        site: String,

        #[arg(long)]
        list: String,
    },

    /// Print the effective configuration.
    Show,
}
