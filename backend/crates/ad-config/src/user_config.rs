use crate::{ConfigError, ConfigErrorResult, DEFAULT_USER_STATUS};

use std::str::FromStr;

use ad_core::{DEFAULT_USER_ROLE, UserFields, UserStatus};
use serde::Deserialize;

/// Defaults shown in a blank "Add User" form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub default_role: String,
    pub default_status: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            default_role: String::from(DEFAULT_USER_ROLE),
            default_status: String::from(DEFAULT_USER_STATUS),
        }
    }
}

impl UserConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_role.trim().is_empty() {
            return Err(ConfigError::users("users.default_role cannot be empty"));
        }

        self.status()?;
        Ok(())
    }

    pub fn status(&self) -> ConfigErrorResult<UserStatus> {
        UserStatus::from_str(&self.default_status).map_err(|_| {
            ConfigError::users(format!(
                "users.default_status must be Active or Inactive, got {}",
                self.default_status
            ))
        })
    }

    /// Blank form state with the configured role and status.
    pub fn blank_form(&self) -> ConfigErrorResult<UserFields> {
        Ok(UserFields {
            role: self.default_role.clone(),
            status: self.status()?,
            ..UserFields::default()
        })
    }
}
