//! Input checks for registry operations. All functions are pure.

use registry_common::UserCollection;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Returned by [`require_fields`] when any field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingFields;

/// Every field must be non-empty. Absent and `null` fields reach here as `""`.
pub fn require_fields(fields: &[&str]) -> Result<(), MissingFields> {
    if fields.iter().any(|f| f.is_empty()) {
        Err(MissingFields)
    } else {
        Ok(())
    }
}

/// Deliberately loose: an `@` and a `.` anywhere in the string.
pub fn valid_email_shape(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

pub fn valid_password_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Case-insensitive email comparison used for every lookup.
pub fn emails_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn is_duplicate_email(collection: &UserCollection, email: &str) -> bool {
    collection.users.iter().any(|u| emails_match(&u.email, email))
}
