use crate::{Action, PermissionCatalog, RolePermissions};

use serde::Serialize;

/// One checkbox of the in-table permission view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub resource: String,
    pub action: Action,
    pub granted: bool,
}

/// A role's row in the permission table: one cell per catalog resource and action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub role: String,
    pub cells: Vec<MatrixCell>,
}

impl MatrixRow {
    pub fn build(role: &RolePermissions, catalog: &PermissionCatalog) -> Self {
        let cells = catalog
            .resources()
            .iter()
            .flat_map(|resource| {
                catalog.actions().iter().map(move |action| MatrixCell {
                    resource: resource.clone(),
                    action: *action,
                    granted: role.is_granted(resource, *action),
                })
            })
            .collect();

        Self {
            role: role.role.clone(),
            cells,
        }
    }

    pub fn cell(&self, resource: &str, action: Action) -> Option<&MatrixCell> {
        self.cells
            .iter()
            .find(|cell| cell.resource == resource && cell.action == action)
    }
}
