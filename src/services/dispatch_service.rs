//! Notification dispatch service.
//!
//! Turns a validated submission into the operator notification and the
//! submitter confirmation, and normalizes provider outcomes.

use crate::client::AsyncEmailClient;
use crate::config::Config;
use crate::domain::{ContactSubmission, EmailAddress};
use crate::error::{DispatchError, DispatchResult};
use crate::metrics::Metrics;
use crate::models::{OutboundEmail, SendEmailResponse};
use crate::templates::{EmailTemplates, RenderedEmail};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Provider ids of the emails a dispatch produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReceipt {
    /// Id of the operator notification
    pub notification_id: String,

    /// Id of the confirmation, `None` when that send failed
    pub confirmation_id: Option<String>,
}

/// Dispatcher trait used by the contact form.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Send the operator notification, then a best-effort confirmation.
    ///
    /// Only a failed operator notification is an error. A failed
    /// confirmation is logged and reported as `confirmation_id: None`.
    async fn dispatch(&self, submission: &ContactSubmission) -> DispatchResult<DispatchReceipt>;

    /// Render the operator notification without sending it.
    fn preview_operator_notification(&self, submission: &ContactSubmission) -> RenderedEmail;

    /// Whether a provider client is available.
    fn is_configured(&self) -> bool;
}

/// Default implementation of NotificationDispatcher.
pub struct NotificationDispatcherImpl {
    client: Option<Arc<dyn AsyncEmailClient>>,
    templates: EmailTemplates,
    from_address: String,
    operator_addresses: Vec<EmailAddress>,
    request_timeout: Duration,
    metrics: Metrics,
}

impl NotificationDispatcherImpl {
    /// Create a dispatcher.
    ///
    /// `client` is `None` when no provider credential is configured; every
    /// dispatch then fails with `ConfigurationMissing` before any I/O.
    pub fn new(
        client: Option<Arc<dyn AsyncEmailClient>>,
        templates: EmailTemplates,
        from_address: impl Into<String>,
        operator_addresses: Vec<EmailAddress>,
    ) -> Self {
        Self {
            client,
            templates,
            from_address: from_address.into(),
            operator_addresses,
            request_timeout: Duration::from_secs(10),
            metrics: Metrics::new(),
        }
    }

    /// Create a dispatcher from loaded configuration.
    pub fn from_config(
        config: &Config,
        client: Option<Arc<dyn AsyncEmailClient>>,
        metrics: Metrics,
    ) -> Self {
        Self::new(
            client,
            EmailTemplates::new(config.brand_name.clone(), config.site_url.clone()),
            config.from_address.clone(),
            config.operator_addresses.clone(),
        )
        .with_timeout(Duration::from_secs(config.request_timeout))
        .with_metrics(metrics)
    }

    /// Upper bound for each provider call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn build_email(
        &self,
        rendered: RenderedEmail,
        to: Vec<String>,
        reply_to: Option<String>,
    ) -> OutboundEmail {
        OutboundEmail {
            from: self.from_address.clone(),
            to,
            subject: rendered.subject,
            html: rendered.html,
            text: rendered.text,
            reply_to,
        }
    }

    /// Send one email, bounded by the request timeout.
    async fn send(
        &self,
        client: &Arc<dyn AsyncEmailClient>,
        email: &OutboundEmail,
    ) -> DispatchResult<SendEmailResponse> {
        match tokio::time::timeout(self.request_timeout, client.send_email(email)).await {
            Ok(Ok(sent)) => Ok(sent),
            Ok(Err(e)) => Err(DispatchError::from(e)),
            Err(_) => Err(DispatchError::UnexpectedException(format!(
                "Provider call timed out after {}s",
                self.request_timeout.as_secs_f32()
            ))),
        }
    }

    fn fail(&self, error: DispatchError) -> DispatchError {
        tracing::error!(
            error_kind = error.kind(),
            error = %error,
            "Contact submission could not be delivered"
        );
        self.metrics.record_dispatch_failure();
        error
    }
}

#[async_trait]
impl NotificationDispatcher for NotificationDispatcherImpl {
    async fn dispatch(&self, submission: &ContactSubmission) -> DispatchResult<DispatchReceipt> {
        let client = match &self.client {
            Some(client) if !self.operator_addresses.is_empty() => client,
            _ => return Err(self.fail(DispatchError::ConfigurationMissing)),
        };

        tracing::info!(
            email_domain = submission.email().domain(),
            has_phone = submission.phone().is_some(),
            message_len = submission.message().len(),
            request_callback = submission.request_callback(),
            "Dispatching contact submission"
        );

        let notification = self.build_email(
            self.templates.render_operator_notification(submission),
            self.operator_addresses
                .iter()
                .map(|address| address.to_string())
                .collect(),
            Some(submission.email().to_string()),
        );

        let notification_id = match self.send(client, &notification).await {
            Ok(sent) => sent.id,
            Err(e) => return Err(self.fail(e)),
        };
        self.metrics.record_notification_sent();
        tracing::info!(notification_id = %notification_id, "Operator notification sent");

        let confirmation = self.build_email(
            self.templates.render_confirmation_message(submission),
            vec![submission.email().to_string()],
            None,
        );

        let confirmation_id = match self.send(client, &confirmation).await {
            Ok(sent) => {
                self.metrics.record_confirmation_sent();
                tracing::info!(confirmation_id = %sent.id, "Confirmation email sent");
                Some(sent.id)
            }
            Err(e) => {
                self.metrics.record_confirmation_failed();
                tracing::warn!(
                    error_kind = e.kind(),
                    error = %e,
                    notification_id = %notification_id,
                    "Confirmation email failed; operator notification was delivered"
                );
                None
            }
        };

        Ok(DispatchReceipt {
            notification_id,
            confirmation_id,
        })
    }

    fn preview_operator_notification(&self, submission: &ContactSubmission) -> RenderedEmail {
        self.templates.render_operator_notification(submission)
    }

    fn is_configured(&self) -> bool {
        self.client.is_some() && !self.operator_addresses.is_empty()
    }
}
