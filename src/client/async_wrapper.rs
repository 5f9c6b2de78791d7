//! Async wrapper around the synchronous ResendClient.
//!
//! This module provides an async interface to the synchronous client by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ResendClient;
use crate::error::{ProviderError, ProviderResult};
use crate::models::{OutboundEmail, SendEmailResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Async email sending interface used by the dispatcher.
///
/// Implemented by the live provider client and the dry-run client; tests
/// provide their own implementation to count and script calls.
#[async_trait]
pub trait AsyncEmailClient: Send + Sync {
    async fn send_email(&self, email: &OutboundEmail) -> ProviderResult<SendEmailResponse>;
}

/// Async wrapper around synchronous ResendClient.
#[derive(Clone)]
pub struct AsyncResendClient {
    client: Arc<ResendClient>,
}

impl AsyncResendClient {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncEmailClient for AsyncResendClient {
    async fn send_email(&self, email: &OutboundEmail) -> ProviderResult<SendEmailResponse> {
        let client = self.client.clone();
        let email = email.clone();

        tokio::task::spawn_blocking(move || client.send_email(&email))
            .await
            .map_err(|e| ProviderError::HttpError(format!("Task join error: {}", e)))?
    }
}
