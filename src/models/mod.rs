//! Data models for the email provider API.

pub mod email;

pub use email::{OutboundEmail, ProviderErrorBody, SendEmailResponse};
