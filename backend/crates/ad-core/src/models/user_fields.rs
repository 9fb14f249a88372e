use crate::validation::validate_user_fields;
use crate::{DEFAULT_USER_ROLE, FieldError, Result as CoreErrorResult, UserStatus};

use serde::{Deserialize, Serialize};

/// The editable part of a user, as submitted by the add/edit-user form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl Default for UserFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: String::from(DEFAULT_USER_ROLE),
            status: UserStatus::Active,
        }
    }
}

impl UserFields {
    pub fn new<N, E, R>(name: N, email: E, role: R, status: UserStatus) -> Self
    where
        N: Into<String>,
        E: Into<String>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status,
        }
    }

    /// Check every field without touching a store.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        validate_user_fields(self)
    }

    /// Per-field errors, empty when the form may be saved
    pub fn errors(&self) -> Vec<FieldError> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => e.field_errors().to_vec(),
        }
    }
}
