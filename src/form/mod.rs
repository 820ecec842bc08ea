//! Form state: field identifiers, current values, and validation
//!
//! The four fields are fixed. `FormValues` is the single live value set owned
//! by a `FieldStore`; `ValidationErrors` is derived from it on every change
//! and never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod store;
pub mod validate;

pub use store::FieldStore;
pub use validate::validate;

/// Identifier for one of the four form fields, ordered by form position.
///
/// The serialized names match the wire names used by the rendered form
/// (`name`, `email`, `password`, `confirmPassword`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "confirmPassword")]
    ConfirmPassword,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Wire name used in serialized values and error maps
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name:",
            Field::Email => "Email:",
            Field::Password => "Password:",
            Field::ConfirmPassword => "Confirm Password:",
        }
    }

    /// Whether the rendered input masks its value
    pub fn is_masked(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

/// Current values of the four form fields
///
/// One live instance per session, owned by the `FieldStore` and discarded
/// when the session is dropped. Values are kept verbatim; no trimming or
/// normalization is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

impl FormValues {
    /// Read the value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Overwrite the value of a field
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.to_string();
    }
}

/// Per-field validation messages, keyed in form order.
///
/// Contains an entry for a field iff that field currently fails its rule.
pub type ValidationErrors = BTreeMap<Field, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_ordered_by_form_position() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }

    #[test]
    fn wire_names_round_trip_through_serde() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.wire_name()));
            let back: Field = serde_json::from_str(&json).unwrap();
            assert_eq!(back, field);
        }
    }

    #[test]
    fn only_password_fields_are_masked() {
        assert!(!Field::Name.is_masked());
        assert!(!Field::Email.is_masked());
        assert!(Field::Password.is_masked());
        assert!(Field::ConfirmPassword.is_masked());
    }

    #[test]
    fn get_and_set_address_the_same_slot() {
        let mut values = FormValues::default();
        for field in Field::ALL {
            values.set(field, field.wire_name());
        }
        for field in Field::ALL {
            assert_eq!(values.get(field), field.wire_name());
        }
    }

    #[test]
    fn values_serialize_with_wire_names() {
        let values = FormValues {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            confirm_password: "x".to_string(),
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["confirmPassword"], "x");
        assert_eq!(json["name"], "Al");
    }
}
