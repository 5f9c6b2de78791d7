//! Wire types for the transactional email provider.

use serde::{Deserialize, Serialize};

/// A single email as accepted by the provider's `POST /emails` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender, e.g. `ADAN MEDIA <kontakt@adanmedia.de>`
    pub from: String,

    /// Recipients
    pub to: Vec<String>,

    pub subject: String,

    pub html: String,

    /// Plain text fallback
    pub text: String,

    /// Address replies should go to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Successful send response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SendEmailResponse {
    /// Provider message identifier
    pub id: String,
}

/// Error body returned by the provider on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub status_code: Option<u16>,

    /// Machine-readable error name, e.g. `validation_error`
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub message: String,
}

impl ProviderErrorBody {
    /// Extract a readable message from a raw error body, falling back to the
    /// body itself when it is not the provider's JSON shape.
    pub fn message_from(body: &str) -> String {
        match serde_json::from_str::<ProviderErrorBody>(body) {
            Ok(parsed) if !parsed.message.is_empty() => match parsed.name {
                Some(name) => format!("{}: {}", name, parsed.message),
                None => parsed.message,
            },
            _ if body.trim().is_empty() => "Unknown error".to_string(),
            _ => body.trim().to_string(),
        }
    }
}
