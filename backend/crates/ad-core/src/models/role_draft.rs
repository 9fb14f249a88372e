//! Uncommitted add/edit-role form state.
//!
//! A draft is a private copy: toggling flags or renaming touches nothing in
//! the [`RoleStore`](crate::RoleStore) until the draft is committed with
//! [`RoleStore::commit`](crate::RoleStore::commit). Dropping it is Cancel.

use crate::{Action, ActionFlags, PermissionCatalog, PermissionMatrix, RolePermissions};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDraft {
    pub role: String,
    #[serde(default)]
    pub description: String,
    /// Full matrix: every catalog resource is present, even when all-false.
    #[serde(default)]
    pub permissions: PermissionMatrix,
    /// Name of the role being edited, exempt from the duplicate-name check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing: Option<String>,
}

/// Granted actions for one resource, in the form's summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSummary {
    pub resource: String,
    pub granted: Vec<Action>,
}

impl ResourceSummary {
    pub fn has_permissions(&self) -> bool {
        !self.granted.is_empty()
    }
}

impl std::fmt::Display for ResourceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.granted.is_empty() {
            return write!(f, "{}: No permissions", self.resource);
        }

        let actions: Vec<&str> = self.granted.iter().map(Action::as_str).collect();
        write!(f, "{}: {}", self.resource, actions.join(", "))
    }
}

impl RoleDraft {
    /// Blank "Add Role" form.
    pub fn new(catalog: &PermissionCatalog) -> Self {
        Self {
            role: String::new(),
            description: String::new(),
            permissions: Self::blank_matrix(catalog),
            editing: None,
        }
    }

    /// "Edit Role" form prefilled from a stored role.
    pub fn edit(existing: &RolePermissions, catalog: &PermissionCatalog) -> Self {
        let mut permissions = Self::blank_matrix(catalog);
        for (resource, flags) in &existing.permissions {
            permissions.insert(resource.clone(), *flags);
        }

        Self {
            role: existing.role.clone(),
            description: existing.description.clone().unwrap_or_default(),
            permissions,
            editing: Some(existing.role.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn toggle(&mut self, resource: &str, action: Action) -> bool {
        self.permissions.toggle(resource, action)
    }

    /// One entry per catalog resource, in catalog order.
    pub fn summary(&self, catalog: &PermissionCatalog) -> Vec<ResourceSummary> {
        catalog
            .resources()
            .iter()
            .map(|resource| ResourceSummary {
                resource: resource.clone(),
                granted: self
                    .permissions
                    .get(resource)
                    .map(|flags| {
                        flags
                            .granted()
                            .into_iter()
                            .filter(|a| catalog.has_action(*a))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// The record the form submits. Pruning happens on commit, not here.
    pub fn to_role(&self) -> RolePermissions {
        let description = self.description.trim();
        RolePermissions {
            role: self.role.clone(),
            description: (!description.is_empty()).then(|| description.to_string()),
            permissions: self.permissions.clone(),
        }
    }

    fn blank_matrix(catalog: &PermissionCatalog) -> PermissionMatrix {
        catalog
            .resources()
            .iter()
            .map(|resource| (resource.clone(), ActionFlags::NONE))
            .collect()
    }
}
