//! Email client that logs instead of sending.

use crate::client::AsyncEmailClient;
use crate::error::ProviderResult;
use crate::models::{OutboundEmail, SendEmailResponse};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Accepts every email, logs its envelope and returns `dry-run-N` ids.
///
/// Used for local development where no provider credential is available.
#[derive(Debug, Default)]
pub struct DryRunEmailClient {
    sent: AtomicU64,
}

impl DryRunEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of emails accepted so far.
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AsyncEmailClient for DryRunEmailClient {
    async fn send_email(&self, email: &OutboundEmail) -> ProviderResult<SendEmailResponse> {
        let n = self.sent.fetch_add(1, Ordering::Relaxed) + 1;

        tracing::info!(
            to = ?email.to,
            reply_to = ?email.reply_to,
            subject = %email.subject,
            html_len = email.html.len(),
            text_len = email.text.len(),
            "Dry run: email not sent"
        );

        Ok(SendEmailResponse {
            id: format!("dry-run-{}", n),
        })
    }
}
