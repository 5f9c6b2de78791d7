//! Configuration management for the contact MCP server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file silently if present.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// How emails leave the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Send through the provider API
    Live,
    /// Log emails and pretend they were sent
    DryRun,
}

impl FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "dry-run" | "dry_run" | "dryrun" => Ok(Self::DryRun),
            other => Err(format!("Must be 'live' or 'dry-run', got: {}", other)),
        }
    }
}

/// Configuration for the contact MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key. `None` is legal at startup; dispatch reports it.
    pub resend_api_key: Option<String>,

    /// Provider API base URL (default: https://api.resend.com)
    pub resend_api_url: String,

    /// Sender used for both outgoing emails
    pub from_address: String,

    /// Operators receiving each notification
    pub operator_addresses: Vec<EmailAddress>,

    /// Brand shown in subjects and templates (default: "ADAN MEDIA")
    pub brand_name: String,

    /// Website linked from the confirmation email
    pub site_url: String,

    /// Delivery mode (default: live)
    pub delivery_mode: DeliveryMode,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACT_FROM_ADDRESS`: Sender of all outgoing emails
    /// - `CONTACT_OPERATOR_ADDRESSES`: Comma-separated operator recipients
    ///
    /// Optional environment variables:
    /// - `RESEND_API_KEY`: Provider credential (absence surfaces at dispatch)
    /// - `RESEND_API_BASE_URL`: Provider URL (default: https://api.resend.com)
    /// - `CONTACT_BRAND_NAME`: Brand name (default: ADAN MEDIA)
    /// - `CONTACT_SITE_URL`: Website URL (default: https://adanmedia.de)
    /// - `DELIVERY_MODE`: `live` or `dry-run` (default: live)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let resend_api_key = env::var("RESEND_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let resend_api_url = env::var("RESEND_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.resend.com".to_string());

        if !resend_api_url.starts_with("http://") && !resend_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let from_address = env::var("CONTACT_FROM_ADDRESS")
            .map_err(|_| ConfigError::MissingVar("CONTACT_FROM_ADDRESS".to_string()))?;

        if from_address.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FROM_ADDRESS".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let operator_addresses = env::var("CONTACT_OPERATOR_ADDRESSES")
            .map_err(|_| ConfigError::MissingVar("CONTACT_OPERATOR_ADDRESSES".to_string()))
            .and_then(|raw| Self::parse_address_list("CONTACT_OPERATOR_ADDRESSES", &raw))?;

        let brand_name =
            env::var("CONTACT_BRAND_NAME").unwrap_or_else(|_| "ADAN MEDIA".to_string());
        let site_url =
            env::var("CONTACT_SITE_URL").unwrap_or_else(|_| "https://adanmedia.de".to_string());

        let delivery_mode = match env::var("DELIVERY_MODE") {
            Ok(val) => val
                .parse::<DeliveryMode>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "DELIVERY_MODE".to_string(),
                    reason,
                })?,
            Err(_) => DeliveryMode::Live,
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            resend_api_key,
            resend_api_url,
            from_address: from_address.trim().to_string(),
            operator_addresses,
            brand_name,
            site_url,
            delivery_mode,
            request_timeout,
            log_level,
        })
    }

    /// Parse a comma-separated list of email addresses; at least one required.
    fn parse_address_list(var_name: &str, raw: &str) -> ConfigResult<Vec<EmailAddress>> {
        let addresses = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                EmailAddress::new(part).map_err(|e| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        if addresses.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "At least one address is required".to_string(),
            });
        }

        Ok(addresses)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_key: None,
            resend_api_url: "https://api.resend.com".to_string(),
            from_address: String::new(),
            operator_addresses: Vec::new(),
            brand_name: "ADAN MEDIA".to_string(),
            site_url: "https://adanmedia.de".to_string(),
            delivery_mode: DeliveryMode::Live,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
