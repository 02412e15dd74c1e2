// Standalone MCP server binary

use anyhow::{Context, Result};
use patchwork_mcp::server::McpServer;
use patchwork_mcp::tools::*;
use patchwork_sdk::PatchworkClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("Patchwork MCP server starting...");

    // The API key is read exactly once, here; an empty value is as fatal as
    // a missing one.
    let api_key = std::env::var("PATCHWORK_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .context("PATCHWORK_API_KEY environment variable is required")?;

    let mut builder = PatchworkClient::builder().api_key(api_key);
    if let Ok(base_url) = std::env::var("PATCHWORK_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = Arc::new(builder.build()?);
    tracing::info!(base_url = %client.base_url(), "upstream configured");

    let mut registry = ToolRegistry::new();

    // Sources
    registry.register(Arc::new(ListSourcesTool::new(client.clone())));
    registry.register(Arc::new(GetSourceTool::new(client.clone())));

    // Sessions
    registry.register(Arc::new(ListSessionsTool::new(client.clone())));
    registry.register(Arc::new(GetSessionTool::new(client.clone())));
    registry.register(Arc::new(CreateSessionTool::new(client.clone())));
    registry.register(Arc::new(SendMessageTool::new(client.clone())));
    registry.register(Arc::new(ApprovePlanTool::new(client.clone())));

    // Activities
    registry.register(Arc::new(ListActivitiesTool::new(client.clone())));

    // Convenience
    registry.register(Arc::new(CreatePullRequestTool::new(client)));

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    let server = McpServer::new(registry);
    server.run().await
}
