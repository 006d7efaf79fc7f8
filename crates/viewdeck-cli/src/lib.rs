mod args;
mod commands;
mod handlers;
pub mod output;

pub use args::{Cli, Commands, ConfigCommand, OutputFormat};
pub use commands::run;
