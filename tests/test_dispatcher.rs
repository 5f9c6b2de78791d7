//! Dispatcher behavior against a scripted email client.

mod mocks;

use contact_mcp_server::client::AsyncEmailClient;
use contact_mcp_server::services::{NotificationDispatcher, NotificationDispatcherImpl};
use contact_mcp_server::{ContactSubmission, DispatchError, EmailAddress, EmailTemplates, Metrics};
use mocks::{MockEmailClient, Scripted};
use std::sync::Arc;
use std::time::Duration;

const FROM: &str = "ADAN MEDIA <kontakt@adanmedia.de>";

fn operators() -> Vec<EmailAddress> {
    vec![
        EmailAddress::new("kontakt@adanmedia.de").unwrap(),
        EmailAddress::new("team@adanmedia.de").unwrap(),
    ]
}

fn dispatcher_with(client: &MockEmailClient) -> NotificationDispatcherImpl {
    NotificationDispatcherImpl::new(
        Some(Arc::new(client.clone()) as Arc<dyn AsyncEmailClient>),
        EmailTemplates::with_year("ADAN MEDIA", "https://adanmedia.de", 2025),
        FROM,
        operators(),
    )
}

fn max() -> ContactSubmission {
    ContactSubmission::new("Max Mustermann", "max@example.com", "", "Hallo", false).unwrap()
}

#[tokio::test]
async fn test_notification_then_confirmation() {
    let client = MockEmailClient::new();
    let dispatcher = dispatcher_with(&client);

    let receipt = dispatcher.dispatch(&max()).await.unwrap();

    let sent = client.sent();
    assert_eq!(sent.len(), 2);

    let notification = &sent[0];
    assert_eq!(notification.from, FROM);
    assert_eq!(
        notification.to,
        vec!["kontakt@adanmedia.de".to_string(), "team@adanmedia.de".to_string()]
    );
    assert!(notification.subject.contains("Max Mustermann"));
    assert_eq!(notification.reply_to.as_deref(), Some("max@example.com"));

    let confirmation = &sent[1];
    assert_eq!(confirmation.to, vec!["max@example.com".to_string()]);
    assert_eq!(confirmation.reply_to, None);

    assert_eq!(receipt.notification_id, "msg-1");
    assert_eq!(receipt.confirmation_id.as_deref(), Some("msg-2"));
}

#[tokio::test]
async fn test_rejected_notification_skips_confirmation() {
    let client = MockEmailClient::with_script(vec![Scripted::Rejected {
        status: 422,
        message: "validation_error: The gmail.com domain is not verified".to_string(),
    }]);
    let dispatcher = dispatcher_with(&client);

    let result = dispatcher.dispatch(&max()).await;

    match result {
        Err(DispatchError::ProviderRejected(message)) => {
            assert!(message.contains("not verified"))
        }
        other => panic!("Expected ProviderRejected, got: {:?}", other),
    }
    assert_eq!(client.call_count(), 1);
    assert!(client.sent_to("max@example.com").is_empty());
    assert_eq!(dispatcher.metrics().dispatch_failures_total(), 1);
}

#[tokio::test]
async fn test_network_error_is_unexpected_exception() {
    let client =
        MockEmailClient::with_script(vec![Scripted::NetworkError("connection reset".to_string())]);
    let dispatcher = dispatcher_with(&client);

    let result = dispatcher.dispatch(&max()).await;

    assert!(matches!(result, Err(DispatchError::UnexpectedException(_))));
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_failed_confirmation_still_succeeds() {
    let client = MockEmailClient::with_script(vec![
        Scripted::Sent("op-123".to_string()),
        Scripted::Rejected {
            status: 403,
            message: "You can only send testing emails to your own address".to_string(),
        },
    ]);
    let dispatcher = dispatcher_with(&client);

    let receipt = dispatcher.dispatch(&max()).await.unwrap();

    assert_eq!(receipt.notification_id, "op-123");
    assert_eq!(receipt.confirmation_id, None);
    assert_eq!(client.call_count(), 2);

    let summary = dispatcher.metrics().summary();
    assert_eq!(summary.notifications_sent_total, 1);
    assert_eq!(summary.confirmations_failed_total, 1);
    assert_eq!(summary.dispatch_failures_total, 0);
}

#[tokio::test]
async fn test_missing_credential_fails_before_any_call() {
    let dispatcher = NotificationDispatcherImpl::new(
        None,
        EmailTemplates::with_year("ADAN MEDIA", "https://adanmedia.de", 2025),
        FROM,
        operators(),
    );

    let result = dispatcher.dispatch(&max()).await;
    assert_eq!(result, Err(DispatchError::ConfigurationMissing));
}

#[tokio::test]
async fn test_hanging_provider_times_out() {
    let client = MockEmailClient::with_script(vec![Scripted::Hang]);
    let metrics = Metrics::new();
    let dispatcher = dispatcher_with(&client)
        .with_timeout(Duration::from_millis(50))
        .with_metrics(metrics.clone());

    let result = dispatcher.dispatch(&max()).await;

    match result {
        Err(DispatchError::UnexpectedException(message)) => {
            assert!(message.contains("timed out"))
        }
        other => panic!("Expected UnexpectedException, got: {:?}", other),
    }
    assert_eq!(client.call_count(), 1);
    assert_eq!(metrics.dispatch_failures_total(), 1);
}

#[tokio::test]
async fn test_hanging_confirmation_is_best_effort() {
    let client = MockEmailClient::with_script(vec![Scripted::Sent("op-1".to_string()), Scripted::Hang]);
    let dispatcher = dispatcher_with(&client).with_timeout(Duration::from_millis(50));

    let receipt = dispatcher.dispatch(&max()).await.unwrap();
    assert_eq!(receipt.notification_id, "op-1");
    assert_eq!(receipt.confirmation_id, None);
}

#[tokio::test]
async fn test_each_dispatch_sends_exactly_once() {
    let client = MockEmailClient::with_script(vec![Scripted::NetworkError("reset".to_string())]);
    let dispatcher = dispatcher_with(&client);

    assert!(dispatcher.dispatch(&max()).await.is_err());
    assert_eq!(client.call_count(), 1, "no automatic retry");

    assert!(dispatcher.dispatch(&max()).await.is_ok());
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn test_message_html_is_escaped_in_sent_notification() {
    let client = MockEmailClient::new();
    let dispatcher = dispatcher_with(&client);
    let submission = ContactSubmission::new(
        "Max",
        "max@example.com",
        "",
        "<a href=\"http://evil\">klick</a>",
        true,
    )
    .unwrap();

    dispatcher.dispatch(&submission).await.unwrap();

    let notification = &client.sent()[0];
    assert!(!notification.html.contains("<a href=\"http://evil\">"));
    assert!(notification.text.contains("<a href=\"http://evil\">klick</a>"));
    assert!(notification.text.contains("Rückruf: Ja, bitte zurückrufen"));
}
