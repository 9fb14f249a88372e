use crate::ConfigErrorResult;

use ad_core::{PermissionCatalog, RolePermissions, RoleStore, UserFields, UserStore};
use serde::Deserialize;

/// Records the stores start with.
///
/// Without a `roles` list the stock roles are used, limited to the configured
/// catalog. Explicit roles are loaded as given and must fit the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub roles: Option<Vec<RolePermissions>>,
    pub users: Vec<UserFields>,
}

impl SeedConfig {
    /// Roles to seed for the given catalog.
    pub fn roles_for(&self, catalog: &PermissionCatalog) -> Vec<RolePermissions> {
        match &self.roles {
            Some(roles) => roles.clone(),
            None => RolePermissions::stock_roles_for(catalog),
        }
    }

    pub fn role_store(&self, catalog: PermissionCatalog) -> ConfigErrorResult<RoleStore> {
        let roles = self.roles_for(&catalog);
        Ok(RoleStore::with_seed(catalog, roles)?)
    }

    pub fn user_store(&self) -> ConfigErrorResult<UserStore> {
        Ok(UserStore::with_seed(self.users.clone())?)
    }
}
