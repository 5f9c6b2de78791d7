//! Contact MCP Server - Main entry point
//!
//! Serves the website contact form over the Model Context Protocol on stdio.

use anyhow::Result;
use contact_mcp_server::client::{AsyncEmailClient, AsyncResendClient, DryRunEmailClient};
use contact_mcp_server::{
    Config, ContactMcpServer, DeliveryMode, Metrics, NotificationDispatcher,
    NotificationDispatcherImpl, ResendClient,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();

    let client: Option<Arc<dyn AsyncEmailClient>> = match config.delivery_mode {
        DeliveryMode::DryRun => {
            info!("Delivery mode: dry-run, emails are logged and not sent");
            Some(Arc::new(DryRunEmailClient::new()))
        }
        DeliveryMode::Live => match ResendClient::from_config(&config, metrics.clone()) {
            Some(sync_client) => {
                info!("Delivery mode: live via {}", config.resend_api_url);
                Some(Arc::new(AsyncResendClient::new(sync_client)))
            }
            None => {
                warn!("RESEND_API_KEY is not set; submissions will fail until it is configured");
                None
            }
        },
    };

    let dispatcher = Arc::new(NotificationDispatcherImpl::from_config(
        &config,
        client,
        metrics.clone(),
    )) as Arc<dyn NotificationDispatcher>;

    info!(
        "Operator recipients: {}, request timeout: {}s",
        config.operator_addresses.len(),
        config.request_timeout
    );

    let server = ContactMcpServer::new(dispatcher, metrics);

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    contact_mcp_server::server::run_server(server).await?;

    info!("Contact MCP Server shutdown complete");
    Ok(())
}
