//! Request lines accepted on stdin, one JSON object per line tagged by `op`.
//!
//! ```json
//! {"op":"create_user","user":{"name":"Ada","email":"ada@example.com"}}
//! {"op":"toggle_permission","role":"Editor","resource":"orders","action":"delete"}
//! ```

use ad_core::{RoleDraft, RolePermissions, UserFields};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    ListUsers,
    FindUser {
        id: Uuid,
    },
    /// Blank add-user form with the configured defaults
    NewUserForm,
    CreateUser {
        user: UserFields,
    },
    UpdateUser {
        id: Uuid,
        user: UserFields,
    },
    DeleteUser {
        id: Uuid,
    },

    ListRoles,
    ValidateRoleName {
        name: String,
        #[serde(default)]
        editing: Option<String>,
    },
    UpsertRole {
        role: RolePermissions,
        #[serde(default)]
        editing: Option<String>,
    },
    /// Action is kept as text so an unknown verb reports UNKNOWN_ACTION
    TogglePermission {
        role: String,
        resource: String,
        action: String,
    },
    DeleteRole {
        role: String,
    },
    Matrix,
    NewRoleDraft,
    EditRoleDraft {
        role: String,
    },
    CommitRoleDraft {
        draft: RoleDraft,
    },
}

impl Command {
    /// Parse one request line.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
