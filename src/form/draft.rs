//! Unvalidated form input.

use crate::domain::{ContactField, ContactSubmission, ValidationError};
use serde::{Deserialize, Serialize};

/// The values currently typed into the contact form.
///
/// Nothing is checked while editing; [`validate`] turns a draft into a
/// [`ContactSubmission`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub request_callback: bool,
}

impl ContactDraft {
    /// Write one field. Only `requestCallback` can reject its value.
    pub fn set(&mut self, field: ContactField, value: &str) -> Result<(), ValidationError> {
        match field {
            ContactField::Name => self.name = value.to_string(),
            ContactField::Email => self.email = value.to_string(),
            ContactField::Phone => self.phone = value.to_string(),
            ContactField::Message => self.message = value.to_string(),
            ContactField::RequestCallback => {
                self.request_callback =
                    parse_flag(value).ok_or_else(|| ValidationError::InvalidFieldValue {
                        field: field.to_string(),
                        value: value.to_string(),
                    })?;
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Check a draft and build the submission it describes.
pub fn validate(draft: &ContactDraft) -> Result<ContactSubmission, ValidationError> {
    ContactSubmission::new(
        &draft.name,
        &draft.email,
        &draft.phone,
        &draft.message,
        draft.request_callback,
    )
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "ja" => Some(true),
        "false" | "0" | "no" | "off" | "nein" | "" => Some(false),
        _ => None,
    }
}
