use async_trait::async_trait;
use contact_mcp_server::client::AsyncEmailClient;
use contact_mcp_server::error::{ProviderError, ProviderResult};
use contact_mcp_server::models::{OutboundEmail, SendEmailResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// What the mock answers to one send.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Scripted {
    Sent(String),
    Rejected { status: u16, message: String },
    NetworkError(String),
    Hang,
}

/// Mock email client for testing.
///
/// Answers are taken from a script in call order; once the script is
/// exhausted every call succeeds with `msg-N`. Every email is recorded.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockEmailClient {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    gate: Arc<Mutex<Option<Arc<Notify>>>>,
}

#[allow(dead_code)]
impl MockEmailClient {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
            gate: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_script(script: Vec<Scripted>) -> Self {
        let client = Self::new();
        *client.script.lock().unwrap() = script.into();
        client
    }

    /// Hold the first call until the returned handle is notified.
    pub fn hold_first_call(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Emails addressed to `recipient` as their only recipient.
    pub fn sent_to(&self, recipient: &str) -> Vec<OutboundEmail> {
        self.sent()
            .into_iter()
            .filter(|email| email.to == vec![recipient.to_string()])
            .collect()
    }
}

impl Default for MockEmailClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncEmailClient for MockEmailClient {
    async fn send_email(&self, email: &OutboundEmail) -> ProviderResult<SendEmailResponse> {
        let n = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            sent.len()
        };

        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let next = self.script.lock().unwrap().pop_front();
        match next {
            None => Ok(SendEmailResponse {
                id: format!("msg-{}", n),
            }),
            Some(Scripted::Sent(id)) => Ok(SendEmailResponse { id }),
            Some(Scripted::Rejected { status, message }) => {
                Err(ProviderError::ApiError { status, message })
            }
            Some(Scripted::NetworkError(message)) => Err(ProviderError::HttpError(message)),
            Some(Scripted::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}
