use crate::Action;

use serde::{Deserialize, Serialize};

/// The four action flags recorded for one resource of one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionFlags {
    pub create: bool,
    pub view: bool,
    pub update: bool,
    pub delete: bool,
}

impl ActionFlags {
    pub const NONE: Self = Self {
        create: false,
        view: false,
        update: false,
        delete: false,
    };

    pub const ALL: Self = Self {
        create: true,
        view: true,
        update: true,
        delete: true,
    };

    /// Flags with exactly the given actions granted.
    pub fn with(actions: &[Action]) -> Self {
        let mut flags = Self::NONE;
        for action in actions {
            flags.set(*action, true);
        }
        flags
    }

    pub fn get(&self, action: Action) -> bool {
        match action {
            Action::Create => self.create,
            Action::View => self.view,
            Action::Update => self.update,
            Action::Delete => self.delete,
        }
    }

    pub fn set(&mut self, action: Action, granted: bool) {
        *self.slot_mut(action) = granted;
    }

    /// Flip one flag and return its new value.
    pub fn toggle(&mut self, action: Action) -> bool {
        let slot = self.slot_mut(action);
        *slot = !*slot;
        *slot
    }

    /// True when at least one action is granted
    pub fn any(&self) -> bool {
        self.create || self.view || self.update || self.delete
    }

    /// Granted actions in column order.
    pub fn granted(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.get(*action))
            .collect()
    }

    /// Same flags with every action outside `enabled` cleared.
    pub fn masked(&self, enabled: &[Action]) -> Self {
        let mut flags = *self;
        for action in Action::ALL {
            if !enabled.contains(&action) {
                flags.set(action, false);
            }
        }
        flags
    }

    fn slot_mut(&mut self, action: Action) -> &mut bool {
        match action {
            Action::Create => &mut self.create,
            Action::View => &mut self.view,
            Action::Update => &mut self.update,
            Action::Delete => &mut self.delete,
        }
    }
}
