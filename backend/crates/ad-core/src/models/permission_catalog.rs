use crate::{Action, CoreError, DEFAULT_RESOURCES, Result as CoreErrorResult};

use std::collections::HashSet;

use serde::Serialize;

/// The resources and actions a role matrix may mention.
///
/// Supplied by configuration; the stores never hard-code either list.
/// Order is preserved and drives the column order of the matrix view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCatalog {
    resources: Vec<String>,
    actions: Vec<Action>,
}

impl Default for PermissionCatalog {
    fn default() -> Self {
        Self {
            resources: DEFAULT_RESOURCES.iter().map(|r| r.to_string()).collect(),
            actions: Action::ALL.to_vec(),
        }
    }
}

impl PermissionCatalog {
    /// Build a catalog, rejecting empty lists, blank resource names and duplicates.
    #[track_caller]
    pub fn new(resources: Vec<String>, actions: Vec<Action>) -> CoreErrorResult<Self> {
        if resources.is_empty() {
            return Err(CoreError::invalid_catalog("at least one resource is required"));
        }

        if actions.is_empty() {
            return Err(CoreError::invalid_catalog("at least one action is required"));
        }

        let resources: Vec<String> = resources.into_iter().map(|r| r.trim().to_string()).collect();

        let mut seen = HashSet::new();
        for resource in &resources {
            if resource.is_empty() {
                return Err(CoreError::invalid_catalog("resource names cannot be blank"));
            }
            if !seen.insert(resource.as_str()) {
                return Err(CoreError::invalid_catalog(format!(
                    "duplicate resource: {}",
                    resource
                )));
            }
        }

        let mut seen_actions = HashSet::new();
        for action in &actions {
            if !seen_actions.insert(*action) {
                return Err(CoreError::invalid_catalog(format!(
                    "duplicate action: {}",
                    action
                )));
            }
        }

        Ok(Self { resources, actions })
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn has_resource(&self, resource: &str) -> bool {
        self.resources.iter().any(|r| r == resource)
    }

    pub fn has_action(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    #[track_caller]
    pub fn check_resource(&self, resource: &str) -> CoreErrorResult<()> {
        if self.has_resource(resource) {
            Ok(())
        } else {
            Err(CoreError::unknown_resource(resource))
        }
    }

    #[track_caller]
    pub fn check_action(&self, action: Action) -> CoreErrorResult<()> {
        if self.has_action(action) {
            Ok(())
        } else {
            Err(CoreError::unknown_action(action.as_str()))
        }
    }
}
