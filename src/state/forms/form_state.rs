//! Form state management: values, per-field errors, and focus

use super::field::FieldName;
use super::validation::{blur_updates, FieldUpdate, ValidationError};
use std::collections::BTreeMap;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Current text of the four inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set_field(&mut self, name: FieldName, value: String) {
        let slot = match name {
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    /// Every field holds some text. Whitespace counts as text here.
    pub fn is_complete(&self) -> bool {
        FieldName::ALL.iter().all(|f| !self.get(*f).is_empty())
    }
}

/// Per-field validation results.
///
/// A missing key and a key holding `None` both mean "not known to be invalid".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<FieldName, Option<ValidationError>>,
}

impl FieldErrors {
    /// Current error for a field, if it is known to be invalid
    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.entries.get(&field).and_then(Option::as_ref)
    }

    pub fn set(&mut self, field: FieldName, error: Option<ValidationError>) {
        self.entries.insert(field, error);
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        self.set(update.field, update.error);
    }

    pub fn has_errors(&self) -> bool {
        self.entries.values().any(Option::is_some)
    }

    /// At least one validated field currently has no error
    pub fn any_clear(&self) -> bool {
        self.entries.values().any(Option::is_none)
    }
}

/// The registration form: owned values, errors, and which row has focus.
///
/// Focus rows 0..=3 are the fields, row 4 is the submit button.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub values: FormValues,
    /// `None` until the first blur, and again after a reset
    pub errors: Option<FieldErrors>,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub const SUBMIT_ROW: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, name: FieldName, value: String) {
        self.values.set_field(name, value);
    }

    /// Field that currently has focus, or None when the submit button does
    pub fn focused_field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn error(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.as_ref().and_then(|e| e.get(field))
    }

    /// Run the validator for a field that just lost focus
    pub fn blur(&mut self, field: FieldName) {
        let updates = blur_updates(field, &self.values);
        let errors = self.errors.get_or_insert_with(FieldErrors::default);
        for update in updates {
            tracing::debug!(
                "validated {} -> {}",
                update.field,
                update.error.as_ref().map_or("ok".to_string(), |e| e.to_string())
            );
            errors.apply(update);
        }
    }

    /// Blur whichever field has focus; no-op on the submit row
    pub fn blur_focused(&mut self) {
        if let Some(field) = self.focused_field() {
            self.blur(field);
        }
    }

    /// Move focus forward, validating the field being left
    pub fn focus_next(&mut self) {
        self.blur_focused();
        self.next_field();
    }

    /// Move focus backward, validating the field being left
    pub fn focus_prev(&mut self) {
        self.blur_focused();
        self.prev_field();
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            let mut value = self.values.get(field).to_string();
            value.push(c);
            self.set_field(field, value);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut value = self.values.get(field).to_string();
            value.pop();
            self.set_field(field, value);
        }
    }

    pub fn clear_focused(&mut self) {
        if let Some(field) = self.focused_field() {
            self.set_field(field, String::new());
        }
    }

    /// Empty every field and forget all validation results
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        5 // four fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
}
