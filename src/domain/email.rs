//! Validated recipient and reply-to addresses.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// local-part "@" domain "." tld, no whitespace, exactly one '@'.
static ADDRESS_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("address pattern compiles")
});

/// An email address that passed the form's shape check.
///
/// Only the shape is checked, never deliverability. Input is trimmed first,
/// so `" max@example.com "` is accepted and stored without the spaces.
///
/// ```
/// use contact_mcp_server::domain::EmailAddress;
///
/// let email = EmailAddress::new(" max@example.com ").unwrap();
/// assert_eq!(email.as_str(), "max@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse an address. The error carries the input as given, untrimmed.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        match raw.trim() {
            candidate if ADDRESS_SHAPE.is_match(candidate) => Ok(Self(candidate.to_owned())),
            _ => Err(ValidationError::InvalidEmail(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything after the '@'; logged instead of the full address.
    pub fn domain(&self) -> &str {
        self.0.rsplit('@').next().unwrap_or_default()
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
