//! Presence and password-match validation
//!
//! Pure and deterministic: no I/O, no logging, no state. Presence means a
//! non-empty string; whitespace counts as content and the email check is
//! presence-only.

use crate::form::{Field, FormValues, ValidationErrors};

/// Validate the current values, returning a message per failing field.
///
/// Rules:
/// - every field empty -> "Required"
/// - confirm-password non-empty but different from password ->
///   "Passwords must match"
pub fn validate(values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if values.name.is_empty() {
        errors.insert(Field::Name, "Required".to_string());
    }
    if values.email.is_empty() {
        errors.insert(Field::Email, "Required".to_string());
    }
    if values.password.is_empty() {
        errors.insert(Field::Password, "Required".to_string());
    }
    if values.confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, "Required".to_string());
    } else if values.confirm_password != values.password {
        errors.insert(Field::ConfirmPassword, "Passwords must match".to_string());
    }

    errors
}
