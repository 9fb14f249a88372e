//! Field rules shared by the user and role stores.
//!
//! Each `check_*` function inspects one field and returns its error, so
//! callers can report every bad field at once instead of stopping at the
//! first.

use crate::{
    CoreError, FIELD_EMAIL, FIELD_NAME, FIELD_ROLE, FieldError, Result as CoreErrorResult,
    UserFields,
};

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Unwrap as the pattern is a literal covered by the validation tests
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// `local@domain.tld`: local part of alphanumerics and `._%+-`, domain of
/// alphanumerics, `-` and `.`, and a TLD of at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn check_name(name: &str) -> Option<FieldError> {
    if name.trim().is_empty() {
        return Some(FieldError::new(FIELD_NAME, "Name is required"));
    }
    None
}

pub fn check_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        return Some(FieldError::new(FIELD_EMAIL, "Email is required"));
    }
    if !is_valid_email(email) {
        return Some(FieldError::new(FIELD_EMAIL, "Invalid email format"));
    }
    None
}

/// Name and email are checked independently; both errors are reported together.
#[track_caller]
pub fn validate_user_fields(fields: &UserFields) -> CoreErrorResult<()> {
    let errors: Vec<FieldError> = [check_name(&fields.name), check_email(&fields.email)]
        .into_iter()
        .flatten()
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::validation(errors))
    }
}

/// Role names compare trimmed and case-insensitively.
pub fn role_names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Error for a candidate role name given the names already taken.
///
/// The role named by `excluding` (the one being edited) may keep its own name.
pub fn check_role_name<'a, I>(
    candidate: &str,
    existing: I,
    excluding: Option<&str>,
) -> Option<FieldError>
where
    I: IntoIterator<Item = &'a str>,
{
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Some(FieldError::new(FIELD_ROLE, "Role name cannot be empty"));
    }

    let taken = existing.into_iter().any(|name| {
        role_names_match(name, trimmed) && !excluding.is_some_and(|ex| role_names_match(name, ex))
    });

    if taken {
        return Some(FieldError::new(
            FIELD_ROLE,
            format!("A role named '{}' already exists", trimmed),
        ));
    }

    None
}

#[track_caller]
pub fn validate_role_name<'a, I>(
    candidate: &str,
    existing: I,
    excluding: Option<&str>,
) -> CoreErrorResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    match check_role_name(candidate, existing, excluding) {
        Some(error) => Err(CoreError::validation(vec![error])),
        None => Ok(()),
    }
}
