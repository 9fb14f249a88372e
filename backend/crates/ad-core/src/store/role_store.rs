//! Role collection and its two mutation paths.
//!
//! - [`RoleStore::upsert`] is the form path: validate, prune all-false
//!   resources, then replace or append in one commit.
//! - [`RoleStore::toggle_permission`] is the table path: flip one flag on the
//!   stored role right away, with no name check and no pruning.
//!
//! The two paths disagree on whether an all-false resource survives. Both
//! behaviors are kept as-is.

use crate::store::Snapshot;
use crate::validation::{check_role_name, validate_role_name};
use crate::{
    Action, CoreError, FIELD_PERMISSIONS, FieldError, MatrixRow, PermissionCatalog,
    PermissionMatrix, Result as CoreErrorResult, RoleDraft, RolePermissions,
};

use std::sync::Arc;

use log::{debug, info};

const ENTITY: &str = "Role";

#[derive(Debug)]
pub struct RoleStore {
    catalog: PermissionCatalog,
    roles: Snapshot<RolePermissions>,
    revision: u64,
}

impl RoleStore {
    pub fn new(catalog: PermissionCatalog) -> Self {
        Self {
            catalog,
            roles: Arc::new(Vec::new()),
            revision: 0,
        }
    }

    /// Build a store from seed roles.
    ///
    /// Seeds are checked like an upsert (unique names, resources from the
    /// catalog) but their matrices are stored as given.
    #[track_caller]
    pub fn with_seed(
        catalog: PermissionCatalog,
        seed: Vec<RolePermissions>,
    ) -> CoreErrorResult<Self> {
        let mut roles: Vec<RolePermissions> = Vec::with_capacity(seed.len());

        for mut role in seed {
            let errors: Vec<FieldError> = [
                check_role_name(&role.role, roles.iter().map(|r| r.role.as_str()), None),
                Self::out_of_catalog(&catalog, &role.permissions),
            ]
            .into_iter()
            .flatten()
            .collect();

            if !errors.is_empty() {
                return Err(CoreError::validation(errors));
            }

            role.role = role.role.trim().to_string();
            role.description = Self::normalize_description(role.description);
            roles.push(role);
        }

        Ok(Self {
            catalog,
            roles: Arc::new(roles),
            revision: 0,
        })
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    pub fn list(&self) -> Snapshot<RolePermissions> {
        Arc::clone(&self.roles)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Case-insensitive lookup
    pub fn find(&self, name: &str) -> Option<&RolePermissions> {
        self.roles.iter().find(|role| role.has_name(name))
    }

    /// Reject a blank name, or one that collides with a role other than `excluding`.
    #[track_caller]
    pub fn validate_name(&self, candidate: &str, excluding: Option<&str>) -> CoreErrorResult<()> {
        validate_role_name(candidate, self.names(), excluding)
    }

    /// Insert or replace a role, keyed by case-insensitive name.
    ///
    /// `editing` names the role the form was opened on. It is exempt from the
    /// duplicate check, and when the name changed it is the role replaced.
    /// All-false resources are pruned before the write. Returns the stored record.
    #[track_caller]
    pub fn upsert(
        &mut self,
        role: RolePermissions,
        editing: Option<&str>,
    ) -> CoreErrorResult<RolePermissions> {
        let errors: Vec<FieldError> = [
            check_role_name(&role.role, self.names(), editing),
            Self::out_of_catalog(&self.catalog, &role.permissions),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !errors.is_empty() {
            let error = CoreError::validation(errors);
            debug!("Rejected role '{}': {}", role.role, error);
            return Err(error);
        }

        let stored = RolePermissions {
            role: role.role.trim().to_string(),
            description: Self::normalize_description(role.description),
            permissions: role.permissions.pruned(),
        };

        let target = self
            .position(&stored.role)
            .or_else(|| editing.and_then(|name| self.position(name)));

        let roles = Arc::make_mut(&mut self.roles);
        match target {
            Some(index) => {
                info!("Replaced role '{}' with '{}'", roles[index].role, stored.role);
                roles[index] = stored.clone();
            }
            None => {
                info!("Added role '{}'", stored.role);
                roles.push(stored.clone());
            }
        }
        self.revision += 1;

        Ok(stored)
    }

    /// Commit an add/edit-role form.
    #[track_caller]
    pub fn commit(&mut self, draft: RoleDraft) -> CoreErrorResult<RolePermissions> {
        let role = draft.to_role();
        self.upsert(role, draft.editing.as_deref())
    }

    /// Blank form for a new role.
    pub fn new_draft(&self) -> RoleDraft {
        RoleDraft::new(&self.catalog)
    }

    /// Form prefilled from an existing role.
    #[track_caller]
    pub fn edit_draft(&self, name: &str) -> CoreErrorResult<RoleDraft> {
        self.find(name)
            .map(|role| RoleDraft::edit(role, &self.catalog))
            .ok_or_else(|| CoreError::not_found(ENTITY, name))
    }

    /// Flip one flag of a stored role immediately and return its new value.
    ///
    /// A missing resource entry is created all-false before the flip. Entries
    /// are never pruned here, so a resource can end up present with every
    /// flag false.
    #[track_caller]
    pub fn toggle_permission(
        &mut self,
        role_name: &str,
        resource: &str,
        action: Action,
    ) -> CoreErrorResult<bool> {
        let Some(index) = self.position(role_name) else {
            return Err(CoreError::not_found(ENTITY, role_name));
        };
        self.catalog.check_resource(resource)?;
        self.catalog.check_action(action)?;

        let role = &mut Arc::make_mut(&mut self.roles)[index];
        let granted = role.permissions.toggle(resource, action);
        self.revision += 1;

        info!(
            "Toggled {}.{} for role '{}' to {}",
            resource, action, role.role, granted
        );
        Ok(granted)
    }

    /// Remove a role. Returns whether anything was removed; a missing name is not an error.
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(index) = self.position(name) else {
            debug!("Delete of unknown role '{}' ignored", name);
            return false;
        };

        let removed = Arc::make_mut(&mut self.roles).remove(index);
        self.revision += 1;

        info!("Deleted role '{}'", removed.role);
        true
    }

    /// Rows of the in-table permission view, in store order.
    pub fn matrix(&self) -> Vec<MatrixRow> {
        self.roles
            .iter()
            .map(|role| MatrixRow::build(role, &self.catalog))
            .collect()
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|role| role.role.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.roles.iter().position(|role| role.has_name(name))
    }

    fn normalize_description(description: Option<String>) -> Option<String> {
        description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
    }

    /// Resources outside the catalog, and granted actions the catalog does not enable.
    fn out_of_catalog(
        catalog: &PermissionCatalog,
        permissions: &PermissionMatrix,
    ) -> Option<FieldError> {
        let unknown: Vec<&str> = permissions
            .resources()
            .filter(|resource| !catalog.has_resource(resource))
            .collect();

        let disabled: Vec<String> = permissions
            .iter()
            .filter(|(resource, _)| catalog.has_resource(resource))
            .flat_map(|(resource, flags)| {
                flags
                    .granted()
                    .into_iter()
                    .filter(|action| !catalog.has_action(*action))
                    .map(move |action| format!("{}.{}", resource, action))
            })
            .collect();

        let mut problems = Vec::new();
        if !unknown.is_empty() {
            problems.push(format!("Unknown resource(s): {}", unknown.join(", ")));
        }
        if !disabled.is_empty() {
            problems.push(format!("Action(s) not enabled: {}", disabled.join(", ")));
        }

        if problems.is_empty() {
            return None;
        }

        Some(FieldError::new(FIELD_PERMISSIONS, problems.join("; ")))
    }
}
