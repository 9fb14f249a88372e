//! Error codes carried in the `error.code` field of a response line.

/// A form field was rejected
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// No user or role with the given key
pub const NOT_FOUND: &str = "NOT_FOUND";

/// The request line could not be parsed
pub const INVALID_MESSAGE: &str = "INVALID_MESSAGE";

/// Resource outside the permission catalog
pub const UNKNOWN_RESOURCE: &str = "UNKNOWN_RESOURCE";

/// Action outside the permission catalog
pub const UNKNOWN_ACTION: &str = "UNKNOWN_ACTION";

/// Anything else
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
