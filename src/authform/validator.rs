//! Pure field rules. The caller owns rendering.

use crate::authform::field::{Field, FieldKind};
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 8 characters long";
pub const NAME_MESSAGE: &str = "Name must be at least 2 characters long";

/// Minimum length of a password chosen at signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_NAME_LENGTH: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Basic `local@domain.tld` shape: one `@`, a dot in the domain, no whitespace.
pub(crate) fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}

/// Validates one field. The first failing rule wins, in this order:
/// required, email shape, signup password length, name length.
#[must_use]
pub fn validate(field: &Field) -> ValidationResult {
    let value = field.value.as_str();

    if field.required && value.trim().is_empty() {
        return ValidationResult::invalid(REQUIRED_MESSAGE);
    }

    if value.is_empty() {
        return ValidationResult::valid();
    }

    match field.kind {
        FieldKind::Email if !valid_email(value) => ValidationResult::invalid(EMAIL_MESSAGE),
        FieldKind::NewPassword if value.chars().count() < MIN_PASSWORD_LENGTH => {
            ValidationResult::invalid(PASSWORD_MESSAGE)
        }
        FieldKind::Name if value.chars().count() < MIN_NAME_LENGTH => {
            ValidationResult::invalid(NAME_MESSAGE)
        }
        _ => ValidationResult::valid(),
    }
}
