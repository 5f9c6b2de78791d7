//! MCP tool handlers for the contact form server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::ContactField;
use crate::error::FormError;
use crate::form::{validate, ContactForm, SubmitOutcome, BUSY_MESSAGE};
use crate::metrics::Metrics;
use crate::services::NotificationDispatcher;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes one contact form to a client.
#[derive(Clone)]
pub struct ContactMcpServer {
    form: Arc<ContactForm>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    metrics: Metrics,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for the website contact form - fill in the draft field by field, preview the operator email, then submit. Submitting sends a notification to the site team and a confirmation to the visitor.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateFieldParams {
    /// One of: name, email, phone, message, requestCallback
    field: String,
    /// New value; for requestCallback use true/false
    value: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Bad input from the client, reported with the message a visitor would see
fn to_invalid_params(e: impl std::fmt::Display, user_message: &str) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: Some(serde_json::json!({ "user_message": user_message })),
    }
}

fn json_result(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&value).map_err(to_mcp_error)?,
    )]))
}

// Tool router implementation
#[tool_router]
impl ContactMcpServer {
    /// Create a new contact MCP server around one form.
    pub fn new(dispatcher: Arc<dyn NotificationDispatcher>, metrics: Metrics) -> Self {
        Self {
            form: Arc::new(ContactForm::new(dispatcher.clone())),
            dispatcher,
            metrics,
            tool_router: Self::tool_router(),
        }
    }

    /// Access the underlying form (useful for testing).
    #[doc(hidden)]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Write one field of the contact draft.
    #[tool(
        description = "Set one field of the contact form draft. Fields: name, email, phone, message (required: name, email, message) and requestCallback (true/false)."
    )]
    async fn update_contact_field(
        &self,
        params: Parameters<UpdateFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let field = params
            .field
            .parse::<ContactField>()
            .map_err(|e| to_invalid_params(&e, e.user_message()))?;

        self.form
            .update_field(field, &params.value)
            .map_err(|e| {
                let user_message = match &e {
                    FormError::Busy => BUSY_MESSAGE,
                    FormError::Invalid(invalid) => invalid.user_message(),
                };
                to_invalid_params(&e, user_message)
            })?;

        tracing::debug!(field = %field, "Draft field updated");

        json_result(serde_json::json!({
            "draft": self.form.draft(),
            "state": self.form.state(),
        }))
    }

    /// Show the current draft and form state.
    #[tool(description = "Show the current contact form draft and whether a submission is in progress")]
    async fn get_contact_draft(&self) -> Result<CallToolResult, McpError> {
        json_result(serde_json::json!({
            "draft": self.form.draft(),
            "state": self.form.state(),
            "delivery_configured": self.dispatcher.is_configured(),
        }))
    }

    /// Render the operator email for the current draft without sending it.
    #[tool(
        description = "Validate the current draft and render the notification the site team would receive, without sending anything"
    )]
    async fn preview_operator_notification(&self) -> Result<CallToolResult, McpError> {
        let submission = validate(&self.form.draft())
            .map_err(|e| to_invalid_params(&e, e.user_message()))?;

        let rendered = self.dispatcher.preview_operator_notification(&submission);
        json_result(serde_json::to_value(&rendered).map_err(to_mcp_error)?)
    }

    /// Submit the current draft.
    #[tool(
        description = "Submit the contact form. Sends the notification to the site team and a confirmation to the visitor. The draft is cleared on success and kept on failure."
    )]
    async fn submit_contact_form(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_contact_form called");

        let outcome = self.form.submit().await;

        let mut response = serde_json::json!({
            "success": outcome.is_success(),
            "message": outcome.user_message(),
            "state": self.form.state(),
        });

        match &outcome {
            SubmitOutcome::Sent(receipt) => {
                tracing::info!(notification_id = %receipt.notification_id, "Contact form submitted");
                response["receipt"] = serde_json::to_value(receipt).map_err(to_mcp_error)?;
            }
            SubmitOutcome::Invalid(e) => {
                response["error"] = serde_json::json!(e.to_string());
            }
            SubmitOutcome::Failed(e) => {
                // Detail stays in the server log; the client gets the kind only.
                response["error_kind"] = serde_json::json!(e.kind());
            }
            SubmitOutcome::AlreadySubmitting => {}
        }

        json_result(response)
    }

    /// Acknowledge the result of the last submission.
    #[tool(description = "Acknowledge the result of the last submission so the form is ready again")]
    async fn acknowledge_submission(&self) -> Result<CallToolResult, McpError> {
        let state = self.form.acknowledge();
        json_result(serde_json::json!({ "state": state }))
    }

    /// Report delivery counters.
    #[tool(description = "Report counters for emails sent, failed confirmations and failed submissions")]
    async fn get_delivery_metrics(&self) -> Result<CallToolResult, McpError> {
        json_result(serde_json::to_value(self.metrics.summary()).map_err(to_mcp_error)?)
    }
}
