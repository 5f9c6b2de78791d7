//! ContactSubmission value object and the fields a contact form carries.

use super::email::EmailAddress;
use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
    RequestCallback,
}

impl ContactField {
    /// Field name as used by the form front end.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
            Self::RequestCallback => "requestCallback",
        }
    }
}

impl FromStr for ContactField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "message" => Ok(Self::Message),
            "requestCallback" | "request_callback" => Ok(Self::RequestCallback),
            other => Err(ValidationError::InvalidFieldValue {
                field: "field".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated contact request, ready to be dispatched.
///
/// Fields are private so a submission can only be obtained through
/// [`ContactSubmission::new`], which enforces the required-field and email
/// checks. Text fields are stored trimmed. The name is folded onto one line
/// with single spaces; inner newlines of the message are kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    name: String,
    email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    message: String,
    request_callback: bool,
}

impl ContactSubmission {
    /// Validate raw form values into a submission.
    ///
    /// Required fields are checked in form order (name, email, message) and
    /// the first empty one is reported. The email shape is checked only once
    /// all required fields are present.
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        message: &str,
        request_callback: bool,
    ) -> Result<Self, ValidationError> {
        let name = required(ContactField::Name, name)?;
        let email = required(ContactField::Email, email)?;
        let message = required(ContactField::Message, message)?;
        let email = EmailAddress::new(email)?;

        let phone = phone.trim();
        let phone = (!phone.is_empty()).then(|| phone.to_string());

        Ok(Self {
            name: single_line(name),
            email,
            phone,
            message: message.to_string(),
            request_callback,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn request_callback(&self) -> bool {
        self.request_callback
    }
}

// Line breaks and tabs in a name would end up in the notification subject.
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn required(field: ContactField, value: &str) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed)
}
