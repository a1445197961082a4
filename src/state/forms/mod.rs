//! Form domain layer
//!
//! Type-safe registration form handling: field metadata, values, validation
//! on blur, and the aggregate validity that gates submission.

mod field;
mod form_state;
mod validation;
mod validity;

pub use field::{FieldName, InputKind};
pub use form_state::{FormValues, RegistrationForm};
pub use validity::ValidityMode;
