//! Field validators
//!
//! Every check works on trimmed values; the values the user typed are never
//! rewritten. Lengths count characters, not bytes.

use super::field::FieldName;
use super::form_state::{FieldErrors, FormValues};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

/// A user-facing validation failure; the Display text is shown under the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The Username is required")]
    UsernameRequired,
    #[error("The Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("The Email is required")]
    EmailRequired,
    #[error("The Email is not valid")]
    EmailInvalid,
    #[error("The Password is required")]
    PasswordRequired,
    #[error("The Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("The Confirm Password is required")]
    ConfirmPasswordRequired,
    #[error("The Passwords do not match")]
    PasswordMismatch,
}

/// New content for one error slot produced by a blur
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: FieldName,
    pub error: Option<ValidationError>,
}

impl FieldUpdate {
    fn clear(field: FieldName) -> Self {
        Self { field, error: None }
    }

    fn set(field: FieldName, error: ValidationError) -> Self {
        Self {
            field,
            error: Some(error),
        }
    }
}

fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length in Unicode scalar values, so `"😀😀"` is two characters, not four
fn shorter_than(value: &str, min: usize) -> bool {
    value.trim().chars().count() < min
}

fn differ(a: &str, b: &str) -> bool {
    a.trim() != b.trim()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Err(ValidationError::UsernameRequired);
    }
    if shorter_than(value, MIN_USERNAME_LEN) {
        return Err(ValidationError::UsernameTooShort);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(value) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Validate the password on its own. The comparison against the
/// confirmation is reported separately by [`password_mismatch`].
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Err(ValidationError::PasswordRequired);
    }
    if shorter_than(value, MIN_PASSWORD_LEN) {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Mismatch detected while validating the password. Only raised once the
/// confirmation has been filled in; the error belongs to the confirmation.
pub fn password_mismatch(password: &str, confirm: &str) -> Option<ValidationError> {
    (!is_empty(confirm) && differ(password, confirm)).then_some(ValidationError::PasswordMismatch)
}

pub fn validate_confirm_password(value: &str, password: &str) -> Result<(), ValidationError> {
    if is_empty(value) {
        return Err(ValidationError::ConfirmPasswordRequired);
    }
    if differ(value, password) {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Slot updates caused by the user leaving `field`.
///
/// The first update always targets `field` itself. Blurring the password can
/// also write the confirmation's slot when the two disagree.
pub fn blur_updates(field: FieldName, values: &FormValues) -> Vec<FieldUpdate> {
    match field {
        FieldName::Username => vec![FieldUpdate {
            field,
            error: validate_username(&values.username).err(),
        }],
        FieldName::Email => vec![FieldUpdate {
            field,
            error: validate_email(&values.email).err(),
        }],
        FieldName::Password => match validate_password(&values.password) {
            Err(err) => vec![FieldUpdate::set(field, err)],
            Ok(()) => {
                let mut updates = vec![FieldUpdate::clear(field)];
                if let Some(err) = password_mismatch(&values.password, &values.confirm_password) {
                    updates.push(FieldUpdate::set(FieldName::ConfirmPassword, err));
                }
                updates
            }
        },
        FieldName::ConfirmPassword => vec![FieldUpdate {
            field,
            error: validate_confirm_password(&values.confirm_password, &values.password).err(),
        }],
    }
}

/// Run every validator once and return a complete error map
pub fn validate_all(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.set(FieldName::Username, validate_username(&values.username).err());
    errors.set(FieldName::Email, validate_email(&values.email).err());
    errors.set(FieldName::Password, validate_password(&values.password).err());
    errors.set(
        FieldName::ConfirmPassword,
        validate_confirm_password(&values.confirm_password, &values.password).err(),
    );
    errors
}
