//! Aggregate validity gating the submit button

use super::form_state::RegistrationForm;
use super::validation::validate_all;
use serde::{Deserialize, Serialize};

/// How aggregate validity is derived from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidityMode {
    /// Errors have been computed, at least one field is error-free, and
    /// every field is filled in. Fields never blurred are not checked.
    #[default]
    Lenient,
    /// Every field is filled in and passes its validator right now
    Strict,
}

impl RegistrationForm {
    pub fn is_valid(&self, mode: ValidityMode) -> bool {
        match mode {
            ValidityMode::Lenient => {
                self.errors.as_ref().is_some_and(|e| e.any_clear()) && self.values.is_complete()
            }
            ValidityMode::Strict => {
                self.values.is_complete() && !validate_all(&self.values).has_errors()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::form_state::FieldErrors;
    use crate::state::forms::FieldName;

    fn filled(username: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_field(FieldName::Username, username.to_string());
        form.set_field(FieldName::Email, email.to_string());
        form.set_field(FieldName::Password, password.to_string());
        form.set_field(FieldName::ConfirmPassword, confirm.to_string());
        form
    }

    mod lenient {
        use super::*;

        #[test]
        fn test_invalid_before_any_blur() {
            let form = filled("abc", "a@b.com", "secret1", "secret1");
            assert!(!form.is_valid(ValidityMode::Lenient));
        }

        #[test]
        fn test_any_empty_field_is_invalid() {
            for empty in FieldName::ALL {
                let mut form = filled("abc", "a@b.com", "secret1", "secret1");
                for field in FieldName::ALL {
                    form.blur(field);
                }
                form.set_field(empty, String::new());
                assert!(!form.is_valid(ValidityMode::Lenient), "{empty} empty");
            }
        }

        #[test]
        fn test_valid_when_filled_and_one_field_clear() {
            let mut form = filled("abc", "a@b.com", "secret1", "secret1");
            form.blur(FieldName::Username);
            assert!(form.is_valid(ValidityMode::Lenient));
        }

        #[test]
        fn test_heuristic_accepts_other_errors() {
            // one clear field is enough even when another is known-bad
            let mut form = filled("abc", "bad", "secret1", "secret1");
            form.blur(FieldName::Username);
            form.blur(FieldName::Email);
            assert!(form.error(FieldName::Email).is_some());
            assert!(form.is_valid(ValidityMode::Lenient));
        }

        #[test]
        fn test_all_errors_is_invalid() {
            let mut form = filled("ab", "bad", "abc", "abd");
            for field in FieldName::ALL {
                form.blur(field);
            }
            assert!(!form.is_valid(ValidityMode::Lenient));
        }

        #[test]
        fn test_whitespace_counts_as_filled() {
            let mut form = filled(" ", " ", " ", " ");
            let mut errors = FieldErrors::default();
            errors.set(FieldName::Username, None);
            form.errors = Some(errors);
            assert!(form.is_valid(ValidityMode::Lenient));
        }
    }

    mod strict {
        use super::*;

        #[test]
        fn test_valid_form_without_blur() {
            let form = filled("abc", "a@b.com", "secret1", "secret1");
            assert!(form.is_valid(ValidityMode::Strict));
        }

        #[test]
        fn test_rejects_any_invalid_field() {
            let mut form = filled("abc", "bad", "secret1", "secret1");
            form.blur(FieldName::Username);
            assert!(!form.is_valid(ValidityMode::Strict));
        }

        #[test]
        fn test_rejects_empty_field() {
            let form = filled("abc", "a@b.com", "secret1", "");
            assert!(!form.is_valid(ValidityMode::Strict));
        }
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&ValidityMode::Strict).unwrap(), "\"strict\"");
        let parsed: ValidityMode = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(parsed, ValidityMode::Lenient);
        assert_eq!(ValidityMode::default(), ValidityMode::Lenient);
    }
}
