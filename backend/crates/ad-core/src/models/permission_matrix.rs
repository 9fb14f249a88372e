//! Sparse per-role permission matrix: resource -> action flags.

use crate::{Action, ActionFlags};

use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use serde::{Deserialize, Serialize};

/// Resource name to action flags. A resource without an entry grants nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMatrix(BTreeMap<String, ActionFlags>);

impl PermissionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, resource: &str) -> Option<&ActionFlags> {
        self.0.get(resource)
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.0.contains_key(resource)
    }

    pub fn is_granted(&self, resource: &str, action: Action) -> bool {
        self.0
            .get(resource)
            .is_some_and(|flags| flags.get(action))
    }

    pub fn insert<S: Into<String>>(&mut self, resource: S, flags: ActionFlags) {
        self.0.insert(resource.into(), flags);
    }

    /// Flip one flag, creating an all-false entry for the resource first if needed.
    /// Returns the new value. Never removes the entry.
    pub fn toggle(&mut self, resource: &str, action: Action) -> bool {
        self.0
            .entry(resource.to_string())
            .or_insert(ActionFlags::NONE)
            .toggle(action)
    }

    /// Drop every resource whose flags are all false. Returns how many were dropped.
    pub fn prune(&mut self) -> usize {
        let before = self.0.len();
        self.0.retain(|_, flags| flags.any());
        before - self.0.len()
    }

    pub fn pruned(mut self) -> Self {
        self.prune();
        self
    }

    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, ActionFlags> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, ActionFlags)> for PermissionMatrix {
    fn from_iter<I: IntoIterator<Item = (S, ActionFlags)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(resource, flags)| (resource.into(), flags))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a PermissionMatrix {
    type Item = (&'a String, &'a ActionFlags);
    type IntoIter = Iter<'a, String, ActionFlags>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
