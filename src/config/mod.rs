//! Application configuration, persisted as TOML under the user config
//! directory.

pub mod config;

pub use config::{BehaviorConfig, Config, DisplayConfig};
