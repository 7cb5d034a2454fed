//! Layered analysis configuration: built-in defaults, then the TOML file,
//! then `--set KEY=VALUE` assignments, then dedicated CLI flags.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{CommandOverrides, build_config};
pub use models::AppConfig;
