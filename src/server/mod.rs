//! MCP server for the website contact form.
//!
//! This module provides the MCP protocol server that exposes the contact
//! form to clients through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact MCP server with stdio transport.
///
/// Communicates via stdin/stdout and returns when the client disconnects.
pub async fn run_server(server: ContactMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
