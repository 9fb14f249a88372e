use std::fmt;
use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn join(errors: &[FieldError]) -> String {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    /// One entry per rejected field; fields are checked independently.
    #[error("Validation error: {} {location}", FieldError::join(.errors))]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {key} {location}")]
    NotFound {
        entity: &'static str,
        key: String,
        location: ErrorLocation,
    },

    #[error("Unknown resource: {value} {location}")]
    UnknownResource {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown action: {value} {location}")]
    UnknownAction {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid user status: {value} {location}")]
    InvalidUserStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid permission catalog: {message} {location}")]
    InvalidCatalog {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        CoreError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(entity: &'static str, key: S) -> Self {
        CoreError::NotFound {
            entity,
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_resource<S: Into<String>>(value: S) -> Self {
        CoreError::UnknownResource {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_action<S: Into<String>>(value: S) -> Self {
        CoreError::UnknownAction {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_catalog<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidCatalog {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field errors carried by a validation failure, empty for every other kind.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CoreError::Validation { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Message for one field, if that field was rejected.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.field_errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;
