use crate::{UserFields, UserStatus};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dashboard user. `role` is a free-text label, not a reference into the role store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl User {
    pub(crate) fn from_fields(id: Uuid, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            role: fields.role,
            status: fields.status,
        }
    }

    /// Editable fields, e.g. to prefill an edit form
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            status: self.status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}
