use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, CatalogConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, SeedConfig, UserConfig,
};

use std::path::{Path, PathBuf};

use ad_core::{RoleStore, UserStore};
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub users: UserConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AD_CONFIG_DIR env var, else use ./.admin/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AD_CONFIG_DIR env var > ./.admin/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration, including that the seed data fits the catalog.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.catalog.validate()?;
        self.users.validate()?;
        self.role_store()?;
        self.user_store()?;
        Ok(())
    }

    /// Role store seeded from config, using the configured catalog.
    pub fn role_store(&self) -> ConfigErrorResult<RoleStore> {
        let catalog = self.catalog.to_catalog()?;
        self.seed.role_store(catalog)
    }

    pub fn user_store(&self) -> ConfigErrorResult<UserStore> {
        self.seed.user_store()
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  catalog: resources=[{}], actions=[{}]",
            self.catalog.resources.join(", "),
            self.catalog.actions.join(", ")
        );
        info!(
            "  users: default_role={}, default_status={}",
            self.users.default_role, self.users.default_status
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        match &self.seed.roles {
            Some(roles) => info!(
                "  seed: {} roles, {} users",
                roles.len(),
                self.seed.users.len()
            ),
            None => info!("  seed: stock roles, {} users", self.seed.users.len()),
        }
    }

    fn apply_env_overrides(&mut self) {
        // Catalog
        Self::apply_env_list("AD_CATALOG_RESOURCES", &mut self.catalog.resources);
        Self::apply_env_list("AD_CATALOG_ACTIONS", &mut self.catalog.actions);

        // Users
        Self::apply_env_string("AD_DEFAULT_ROLE", &mut self.users.default_role);
        Self::apply_env_string("AD_DEFAULT_STATUS", &mut self.users.default_status);

        // Logging
        Self::apply_env_parse("AD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = CatalogConfig::split_list(&val);
        }
    }
}
