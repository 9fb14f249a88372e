use crate::store::Snapshot;
use crate::{CoreError, Result as CoreErrorResult, User, UserFields};

use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

const ENTITY: &str = "User";

/// Owns the user collection, in insertion order.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Snapshot<User>,
    revision: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed records, each validated like `create`.
    #[track_caller]
    pub fn with_seed(seed: Vec<UserFields>) -> CoreErrorResult<Self> {
        let mut store = Self::new();
        for fields in seed {
            store.create(fields)?;
        }
        Ok(store)
    }

    pub fn list(&self) -> Snapshot<User> {
        Arc::clone(&self.users)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Bumped on every committed mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Validate and append a new user under a fresh id.
    #[track_caller]
    pub fn create(&mut self, fields: UserFields) -> CoreErrorResult<User> {
        if let Err(e) = fields.validate() {
            debug!("Rejected new user: {}", e);
            return Err(e);
        }

        let user = User::from_fields(self.fresh_id(), fields);
        Arc::make_mut(&mut self.users).push(user.clone());
        self.revision += 1;

        info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Replace the fields of an existing user, keeping its id and position.
    #[track_caller]
    pub fn update(&mut self, id: Uuid, fields: UserFields) -> CoreErrorResult<User> {
        let Some(index) = self.position(id) else {
            return Err(CoreError::not_found(ENTITY, id.to_string()));
        };

        if let Err(e) = fields.validate() {
            debug!("Rejected update of user {}: {}", id, e);
            return Err(e);
        }

        let user = User::from_fields(id, fields);
        Arc::make_mut(&mut self.users)[index] = user.clone();
        self.revision += 1;

        info!("Updated user {}", id);
        Ok(user)
    }

    /// Remove a user. Returns whether anything was removed; a missing id is not an error.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let Some(index) = self.position(id) else {
            debug!("Delete of unknown user {} ignored", id);
            return false;
        };

        Arc::make_mut(&mut self.users).remove(index);
        self.revision += 1;

        info!("Deleted user {}", id);
        true
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.position(id).is_none() {
                return id;
            }
        }
    }
}
