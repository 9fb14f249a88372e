//! Command dispatch over the two stores.
//!
//! Every command is answered; failures become error responses and the
//! session keeps going.

use crate::command::Command;
use crate::error::Result as CliErrorResult;
use crate::response::Response;

use ad_config::Config;
use ad_core::{
    Action, CoreError, Result as CoreErrorResult, RoleDraft, RoleStore, UserFields, UserStore,
};
use log::{debug, warn};
use serde::Serialize;
use serde_json::json;

pub struct Session {
    users: UserStore,
    roles: RoleStore,
    blank_user: UserFields,
}

impl Session {
    pub fn new(users: UserStore, roles: RoleStore, blank_user: UserFields) -> Self {
        Self {
            users,
            roles,
            blank_user,
        }
    }

    /// Build the stores and form defaults from a loaded config.
    pub fn from_config(config: &Config) -> CliErrorResult<Self> {
        Ok(Self::new(
            config.user_store()?,
            config.role_store()?,
            config.users.blank_form()?,
        ))
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn roles(&self) -> &RoleStore {
        &self.roles
    }

    /// Parse and run one request line.
    pub fn handle(&mut self, line: &str) -> Response {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(e) => {
                debug!("Rejected request line: {}", e);
                Response::invalid_message(format!("Invalid request: {}", e))
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Response {
        debug!("Executing {:?}", command);
        self.dispatch(command).unwrap_or_else(Response::from)
    }

    fn dispatch(&mut self, command: Command) -> CoreErrorResult<Response> {
        let response = match command {
            // Users
            Command::ListUsers => reply(self.users.list().as_slice(), self.users.revision()),
            Command::FindUser { id } => {
                let user = self
                    .users
                    .find_by_id(id)
                    .ok_or_else(|| CoreError::not_found("User", id.to_string()))?;
                reply(user, self.users.revision())
            }
            Command::NewUserForm => reply(&self.blank_user, self.users.revision()),
            Command::CreateUser { user } => {
                let created = self.users.create(user)?;
                reply(&created, self.users.revision())
            }
            Command::UpdateUser { id, user } => {
                let updated = self.users.update(id, user)?;
                reply(&updated, self.users.revision())
            }
            Command::DeleteUser { id } => {
                let deleted = self.users.delete(id);
                reply(&json!({ "deleted": deleted }), self.users.revision())
            }

            // Roles
            Command::ListRoles => reply(self.roles.list().as_slice(), self.roles.revision()),
            Command::ValidateRoleName { name, editing } => {
                self.roles.validate_name(&name, editing.as_deref())?;
                reply(&json!({ "valid": true }), self.roles.revision())
            }
            Command::UpsertRole { role, editing } => {
                let stored = self.roles.upsert(role, editing.as_deref())?;
                reply(&stored, self.roles.revision())
            }
            Command::TogglePermission {
                role,
                resource,
                action,
            } => {
                if self.roles.find(&role).is_none() {
                    return Err(CoreError::not_found("Role", role));
                }
                self.roles.catalog().check_resource(&resource)?;
                let action = action.parse::<Action>()?;

                let granted = self.roles.toggle_permission(&role, &resource, action)?;
                reply(
                    &json!({
                        "role": role,
                        "resource": resource,
                        "action": action,
                        "granted": granted,
                    }),
                    self.roles.revision(),
                )
            }
            Command::DeleteRole { role } => {
                let deleted = self.roles.delete(&role);
                reply(&json!({ "deleted": deleted }), self.roles.revision())
            }
            Command::Matrix => reply(&self.roles.matrix(), self.roles.revision()),
            Command::NewRoleDraft => self.draft_reply(self.roles.new_draft()),
            Command::EditRoleDraft { role } => {
                let draft = self.roles.edit_draft(&role)?;
                self.draft_reply(draft)
            }
            Command::CommitRoleDraft { draft } => {
                let stored = self.roles.commit(draft)?;
                reply(&stored, self.roles.revision())
            }
        };

        Ok(response)
    }

    fn draft_reply(&self, draft: RoleDraft) -> Response {
        let summary = draft.summary(self.roles.catalog());
        reply(
            &json!({ "draft": draft, "summary": summary }),
            self.roles.revision(),
        )
    }
}

fn reply<T: Serialize + ?Sized>(data: &T, revision: u64) -> Response {
    match serde_json::to_value(data) {
        Ok(value) => Response::success(value, revision),
        Err(e) => {
            warn!("Failed to serialize response: {}", e);
            Response::internal(format!("Failed to serialize response: {}", e))
        }
    }
}
