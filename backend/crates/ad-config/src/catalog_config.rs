use crate::{ConfigError, ConfigErrorResult};

use ad_core::{Action, DEFAULT_RESOURCES, PermissionCatalog};
use serde::Deserialize;

/// Resources and actions offered by the permission matrix.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub resources: Vec<String>,
    pub actions: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            resources: DEFAULT_RESOURCES.iter().map(|r| r.to_string()).collect(),
            actions: Action::ALL.iter().map(|a| a.as_str().to_string()).collect(),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.to_catalog().map(|_| ())
    }

    /// Build the catalog handed to the role store.
    #[track_caller]
    pub fn to_catalog(&self) -> ConfigErrorResult<PermissionCatalog> {
        let actions = self
            .actions
            .iter()
            .map(|a| a.parse::<Action>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::catalog(format!("catalog.actions: {}", e)))?;

        PermissionCatalog::new(self.resources.clone(), actions)
            .map_err(|e| ConfigError::catalog(format!("catalog.resources: {}", e)))
    }

    /// Parse a comma-separated override, dropping blank items
    pub(crate) fn split_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
