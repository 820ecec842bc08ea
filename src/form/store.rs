//! The field store: owns the live `FormValues` and the derived errors
//!
//! Every mutation revalidates and then invokes the registered change
//! observer, so renderers stay in step with the values without polling.

use std::sync::Arc;

use log::debug;

use crate::form::{validate, Field, FormValues, ValidationErrors};

type OnChangeHandler = Arc<dyn Fn(&FormValues, &ValidationErrors) + Send + Sync>;

/// Holds the current field values and their validation state.
pub struct FieldStore {
    values: FormValues,
    errors: ValidationErrors,
    on_change: Option<OnChangeHandler>,
}

impl FieldStore {
    /// Create a store with empty values; the initial error set reflects them.
    pub fn new() -> Self {
        let values = FormValues::default();
        let errors = validate(&values);
        Self {
            values,
            errors,
            on_change: None,
        }
    }

    /// Overwrite one field, revalidate, and notify the change observer.
    pub fn set(&mut self, field: Field, value: &str) {
        self.values.set(field, value);
        self.errors = validate(&self.values);
        debug!(
            "field {} updated; {} field(s) failing",
            field.wire_name(),
            self.errors.len()
        );
        if let Some(cb) = &self.on_change {
            cb(&self.values, &self.errors);
        }
    }

    /// Current values
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current validation state
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Whether every field currently passes validation
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Register a callback invoked after every mutation with the fresh
    /// values and errors. Replaces any previously registered callback.
    pub fn on_change<F>(&mut self, cb: F)
    where
        F: Fn(&FormValues, &ValidationErrors) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(cb));
    }

    /// Remove the previously registered change callback if any
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn new_store_reports_every_field_required() {
        let store = FieldStore::new();
        assert_eq!(store.errors().len(), 4);
        assert!(!store.is_valid());
    }

    #[test]
    fn set_revalidates_immediately() {
        let mut store = FieldStore::new();
        store.set(Field::Name, "Al");
        assert!(store.errors().get(&Field::Name).is_none());
        store.set(Field::Name, "");
        assert_eq!(
            store.errors().get(&Field::Name).map(String::as_str),
            Some("Required")
        );
    }

    #[test]
    fn observer_sees_fresh_values_and_errors() {
        let calls = Arc::new(AtomicUsize::new(0));
        let last_name = Arc::new(Mutex::new(String::new()));

        let mut store = FieldStore::new();
        let calls_cb = Arc::clone(&calls);
        let last_name_cb = Arc::clone(&last_name);
        store.on_change(move |values, errors| {
            calls_cb.fetch_add(1, Ordering::SeqCst);
            *last_name_cb.lock().unwrap() = values.name.clone();
            assert_eq!(errors.contains_key(&Field::Name), values.name.is_empty());
        });

        store.set(Field::Name, "Al");
        store.set(Field::Name, "");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(last_name.lock().unwrap().as_str(), "");
    }

    #[test]
    fn clear_on_change_stops_notifications() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut store = FieldStore::new();
        let calls_cb = Arc::clone(&calls);
        store.on_change(move |_, _| {
            calls_cb.fetch_add(1, Ordering::SeqCst);
        });
        store.set(Field::Email, "a@b.com");
        store.clear_on_change();
        store.set(Field::Email, "b@c.com");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn store_becomes_valid_once_all_fields_pass() {
        let mut store = FieldStore::new();
        store.set(Field::Name, "Al");
        store.set(Field::Email, "a@b.com");
        store.set(Field::Password, "x");
        assert!(!store.is_valid());
        store.set(Field::ConfirmPassword, "x");
        assert!(store.is_valid());
    }
}
