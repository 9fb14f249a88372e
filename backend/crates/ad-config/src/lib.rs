mod catalog_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod seed_config;
mod user_config;

#[cfg(test)]
mod tests;

pub use catalog_config::CatalogConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use seed_config::SeedConfig;
pub use user_config::UserConfig;

const CONFIG_DIR_ENV: &str = "AD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".admin";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_USER_STATUS: &str = "Active";
