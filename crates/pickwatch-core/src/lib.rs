//! Shared configuration and domain types for the pickwatch workspace.

pub mod app_config;
pub mod config;
pub mod reports;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use reports::{CollectionEntry, Report};
