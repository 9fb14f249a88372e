//! Role entity - a named permission matrix.

use crate::validation::role_names_match;
use crate::{Action, ActionFlags, PermissionCatalog, PermissionMatrix};

use serde::{Deserialize, Serialize};

/// A role and the actions it grants per resource.
///
/// `role` is the primary key. Names are unique case-insensitively but keep
/// the case they were entered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermissions {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: PermissionMatrix,
}

impl RolePermissions {
    /// Create a role with no description and no permissions
    pub fn new<S: Into<String>>(role: S) -> Self {
        Self {
            role: role.into(),
            description: None,
            permissions: PermissionMatrix::new(),
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_resource<S: Into<String>>(mut self, resource: S, flags: ActionFlags) -> Self {
        self.permissions.insert(resource, flags);
        self
    }

    pub fn is_granted(&self, resource: &str, action: Action) -> bool {
        self.permissions.is_granted(resource, action)
    }

    /// Case-insensitive, whitespace-trimmed name comparison
    pub fn has_name(&self, name: &str) -> bool {
        role_names_match(&self.role, name)
    }

    /// Copy limited to the catalog: other resources dropped, disabled actions
    /// cleared, and resources left with nothing granted pruned.
    pub fn restricted_to(&self, catalog: &PermissionCatalog) -> Self {
        let permissions: PermissionMatrix = self
            .permissions
            .iter()
            .filter(|(resource, _)| catalog.has_resource(resource))
            .map(|(resource, flags)| (resource.clone(), flags.masked(catalog.actions())))
            .collect();

        Self {
            role: self.role.clone(),
            description: self.description.clone(),
            permissions: permissions.pruned(),
        }
    }

    /// Stock roles fitted to a catalog.
    pub fn stock_roles_for(catalog: &PermissionCatalog) -> Vec<RolePermissions> {
        Self::stock_roles()
            .iter()
            .map(|role| role.restricted_to(catalog))
            .collect()
    }

    /// The roles a fresh dashboard starts with.
    pub fn stock_roles() -> Vec<RolePermissions> {
        use Action::{Create, Update, View};

        vec![
            RolePermissions::new("Admin")
                .with_description("Full system access")
                .with_resource("events", ActionFlags::ALL)
                .with_resource("users", ActionFlags::ALL)
                .with_resource("products", ActionFlags::ALL)
                .with_resource("orders", ActionFlags::ALL),
            RolePermissions::new("Editor")
                .with_description("Limited administrative access")
                .with_resource("events", ActionFlags::with(&[Create, View, Update]))
                .with_resource("users", ActionFlags::with(&[View]))
                .with_resource("products", ActionFlags::with(&[Create, View, Update]))
                .with_resource("orders", ActionFlags::with(&[View])),
            RolePermissions::new("Viewer")
                .with_description("Read-only access")
                .with_resource("events", ActionFlags::with(&[View]))
                .with_resource("users", ActionFlags::with(&[View]))
                .with_resource("products", ActionFlags::with(&[View]))
                .with_resource("orders", ActionFlags::with(&[View])),
        ]
    }
}
