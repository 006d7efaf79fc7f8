pub mod classify;
pub mod config_cmd;
pub mod expand;
pub mod show;
