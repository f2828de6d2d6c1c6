//! Placeholder login and signup checks.
//!
//! Only emptiness is validated. No credential store exists and none is
//! consulted; any non-empty email and password pair is accepted.

use crate::error::{Field, ValidationError};

/// Check a login form
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    let missing = empty_fields(&[(Field::Email, email), (Field::Password, password)]);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingCredentials { missing })
    }
}

/// Check a signup form
pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    let missing = empty_fields(&[
        (Field::Username, username),
        (Field::Email, email),
        (Field::Password, password),
    ]);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::IncompleteSignup { missing })
    }
}

// Whitespace counts as filled in.
fn empty_fields(fields: &[(Field, &str)]) -> Vec<Field> {
    fields.iter().filter(|(_, value)| value.is_empty()).map(|(field, _)| *field).collect()
}
