use crate::error_codes::{
    INTERNAL_ERROR, INVALID_MESSAGE, NOT_FOUND, UNKNOWN_ACTION, UNKNOWN_RESOURCE,
    VALIDATION_ERROR,
};

use ad_core::{CoreError, FieldError};
use serde::Serialize;
use serde_json::{Value, json};

/// One response line.
#[derive(Debug, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Revision of the store the command addressed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Machine-readable code, human-readable message and any per-field errors.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub fields: Vec<FieldError>,
}

impl Response {
    pub fn success(data: Value, revision: u64) -> Self {
        Self {
            ok: true,
            data: Some(data),
            revision: Some(revision),
            error: None,
        }
    }

    pub fn failure(error: ErrorBody) -> Self {
        Self {
            ok: false,
            data: None,
            revision: None,
            error: Some(error),
        }
    }

    pub fn invalid_message<S: Into<String>>(message: S) -> Self {
        Self::failure(ErrorBody {
            code: INVALID_MESSAGE,
            message: message.into(),
            fields: Vec::new(),
        })
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::failure(ErrorBody {
            code: INTERNAL_ERROR,
            message: message.into(),
            fields: Vec::new(),
        })
    }

    pub fn code(&self) -> Option<&'static str> {
        self.error.as_ref().map(|e| e.code)
    }

    /// Serialize for output, falling back to an INTERNAL_ERROR line.
    pub fn to_line(&self, pretty: bool) -> String {
        let serialized = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };

        serialized.unwrap_or_else(|e| {
            json!({
                "ok": false,
                "error": {
                    "code": INTERNAL_ERROR,
                    "message": format!("Failed to serialize response: {}", e),
                    "fields": [],
                },
            })
            .to_string()
        })
    }
}

impl From<CoreError> for ErrorBody {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation { errors, .. } => ErrorBody {
                code: VALIDATION_ERROR,
                message: String::from("Validation failed"),
                fields: errors,
            },
            CoreError::NotFound { entity, key, .. } => ErrorBody {
                code: NOT_FOUND,
                message: format!("{} not found: {}", entity, key),
                fields: Vec::new(),
            },
            CoreError::UnknownResource { value, .. } => ErrorBody {
                code: UNKNOWN_RESOURCE,
                message: format!("Unknown resource: {}", value),
                fields: Vec::new(),
            },
            CoreError::UnknownAction { value, .. } => ErrorBody {
                code: UNKNOWN_ACTION,
                message: format!("Unknown action: {}", value),
                fields: Vec::new(),
            },
            other => ErrorBody {
                code: INTERNAL_ERROR,
                message: other.to_string(),
                fields: Vec::new(),
            },
        }
    }
}

impl From<CoreError> for Response {
    fn from(error: CoreError) -> Self {
        Response::failure(ErrorBody::from(error))
    }
}
