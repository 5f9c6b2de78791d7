//! Error types for the contact MCP server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the email provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned an error status code
    #[error("Provider error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to serialize the request or parse the response
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Credential rejected by the provider
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request refused before it reached the provider
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ProviderError {
    /// Whether the provider itself answered with an error, as opposed to the
    /// call failing on the way there or back.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::ApiError { .. }
                | Self::Unauthorized(_)
                | Self::RateLimitExceeded
                | Self::InvalidRequest(_)
        )
    }

    /// Provider-facing message, without the variant prefix.
    pub fn provider_message(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            Self::Unauthorized(message) | Self::InvalidRequest(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Outcome of a failed dispatch, as seen by the form.
///
/// All variants are shown to the submitter as the same generic message; the
/// variant only matters for the server-side log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No provider credential configured; nothing was sent
    #[error("Email provider credential is not configured")]
    ConfigurationMissing,

    /// Provider refused the operator notification
    #[error("Email provider rejected the notification: {0}")]
    ProviderRejected(String),

    /// Anything else: transport failure, timeout, serialization, task panic
    #[error("Unexpected error while sending email: {0}")]
    UnexpectedException(String),
}

impl DispatchError {
    /// Short stable name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing => "configuration_missing",
            Self::ProviderRejected(_) => "provider_rejected",
            Self::UnexpectedException(_) => "unexpected_exception",
        }
    }
}

impl From<ProviderError> for DispatchError {
    fn from(error: ProviderError) -> Self {
        if error.is_rejection() {
            DispatchError::ProviderRejected(error.provider_message())
        } else {
            DispatchError::UnexpectedException(error.to_string())
        }
    }
}

/// Errors returned when editing the contact form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The form is submitting and its inputs are locked
    #[error("Form is busy submitting")]
    Busy,

    /// The value cannot be stored in the field
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Convenience type alias for Results with ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;
