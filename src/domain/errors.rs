//! Domain validation errors.

use super::submission::ContactField;
use std::fmt;

/// Errors that can occur while validating contact form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace only.
    MissingField(ContactField),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// A field received a value it cannot hold.
    InvalidFieldValue { field: String, value: String },
}

impl ValidationError {
    /// Message shown to the person filling in the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Bitte fülle alle erforderlichen Felder aus.",
            Self::InvalidEmail(_) => "Bitte gib eine gültige E-Mail-Adresse ein.",
            Self::InvalidFieldValue { .. } => "Bitte überprüfe deine Eingaben.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing required field: {}", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidFieldValue { field, value } => {
                write!(f, "Invalid value for {}: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
