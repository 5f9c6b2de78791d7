//! HTTP client for the transactional email provider.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and maps
//! provider responses to [`ProviderError`].

mod async_wrapper;
mod dry_run;

pub use async_wrapper::{AsyncEmailClient, AsyncResendClient};
pub use dry_run::DryRunEmailClient;

use crate::config::Config;
use crate::error::{ProviderError, ProviderResult};
use crate::metrics::Metrics;
use crate::models::{OutboundEmail, ProviderErrorBody, SendEmailResponse};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the Resend email API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the provider API
    base_url: String,

    /// API key sent as bearer token
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new client from configuration.
    ///
    /// Returns `None` when no API key is configured; callers treat that as
    /// a missing configuration rather than an error at startup.
    pub fn from_config(config: &Config, metrics: Metrics) -> Option<Self> {
        let api_key = config.resend_api_key.clone()?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Some(Self {
            base_url: config.resend_api_url.clone(),
            api_key,
            agent: Arc::new(agent),
            metrics,
        })
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, ProviderError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                self.metrics.record_provider_request(duration);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_provider_error();
                self.metrics.record_provider_request(duration);
            }
        }

        result
    }

    /// Map a ureq error to a ProviderError.
    fn map_error(&self, error: ureq::Error) -> ProviderError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                let message = ProviderErrorBody::message_from(&body);

                match code {
                    401 | 403 => ProviderError::Unauthorized(message),
                    429 => ProviderError::RateLimitExceeded,
                    _ => ProviderError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ProviderError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ProviderError::Timeout
                } else {
                    ProviderError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Send one email and return the provider's message id.
    pub fn send_email(&self, email: &OutboundEmail) -> ProviderResult<SendEmailResponse> {
        if email.to.is_empty() {
            return Err(ProviderError::InvalidRequest(
                "Email has no recipients".to_string(),
            ));
        }

        let body = serde_json::to_value(email).map_err(ProviderError::JsonError)?;
        let response = self.post("/emails", &body)?;
        let body = response
            .into_string()
            .map_err(|e| ProviderError::HttpError(e.to_string()))?;

        let sent: SendEmailResponse = serde_json::from_str(&body).map_err(ProviderError::JsonError)?;
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_slashes() {
        let client = ResendClient::with_base_url("https://api.resend.com/".into(), "key".into());
        assert_eq!(client.build_url("/emails"), "https://api.resend.com/emails");
        assert_eq!(client.build_url("emails"), "https://api.resend.com/emails");
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = Config::default();
        assert!(ResendClient::from_config(&config, Metrics::new()).is_none());

        let config = Config {
            resend_api_key: Some("re_123".to_string()),
            ..Config::default()
        };
        assert!(ResendClient::from_config(&config, Metrics::new()).is_some());
    }

    #[test]
    fn test_send_email_without_recipients_is_refused_locally() {
        let client = ResendClient::with_base_url("http://127.0.0.1:9".into(), "key".into());
        let email = OutboundEmail {
            from: "kontakt@adanmedia.de".to_string(),
            to: Vec::new(),
            subject: "s".to_string(),
            html: "h".to_string(),
            text: "t".to_string(),
            reply_to: None,
        };

        let result = client.send_email(&email);
        assert!(matches!(result, Err(ProviderError::InvalidRequest(_))));
        assert_eq!(client.metrics().provider_requests_total(), 0);
    }
}
