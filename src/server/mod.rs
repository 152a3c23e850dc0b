//! MCP server for the care portal search.
//!
//! Exposes search, recent-search history and onboarding progress to
//! assistants and UI bridges over the Model Context Protocol.

pub mod handlers;

pub use handlers::PortalSearchServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the portal search server with stdio transport.
///
/// Blocks until the client disconnects or a fatal transport error occurs.
pub async fn run_server(server: PortalSearchServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
