//! Contact MCP Server - the contact form pipeline of the ADAN MEDIA website.
//!
//! A visitor's form input is validated into a [`ContactSubmission`], then the
//! [`NotificationDispatcher`] emails the site team and sends the visitor a
//! best-effort confirmation through a transactional email API.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (email address, submission, fields)
//! - **form**: Draft state, validation and the guarded submit flow
//! - **templates**: Pure rendering of the notification and confirmation emails
//! - **services**: The dispatch pipeline and its failure policy
//! - **client**: HTTP client for the email provider, plus a dry-run client
//! - **models**: Provider wire types
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Delivery counters
//! - **server**: MCP protocol server exposing the form as tools

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod templates;

pub use client::{AsyncEmailClient, AsyncResendClient, DryRunEmailClient, ResendClient};
pub use config::{Config, DeliveryMode};
pub use domain::{ContactField, ContactSubmission, EmailAddress, ValidationError};
pub use error::{ConfigError, DispatchError, FormError, ProviderError};
pub use form::{validate, ContactDraft, ContactForm, FormState, SubmitOutcome};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{OutboundEmail, SendEmailResponse};
pub use server::ContactMcpServer;
pub use services::{DispatchReceipt, NotificationDispatcher, NotificationDispatcherImpl};
pub use templates::{EmailTemplates, RenderedEmail};
