//! Newsreel MCP Server
//!
//! Exposes the news pipeline as Model Context Protocol tools over stdio

mod server;
mod tools;
mod transport;

use newsreel_common::{NewsreelError, Result};
use newsreel_llm::NewsPipeline;
use rmcp::ServiceExt;
use tracing::info;

pub use server::{NewsServer, SERVER_INSTRUCTIONS, SERVER_NAME};
pub use tools::{canonical_name, NewsQuery, FETCH_NEWS, GEN_VID_TRANS};
pub use transport::framed;

/// Serve MCP on stdin/stdout until stdin closes.
///
/// Stdout carries protocol frames only; log to stderr.
pub async fn run_stdio(pipeline: NewsPipeline) -> Result<()> {
    info!("Starting MCP server on stdio");

    let (stdin, stdout) = rmcp::transport::stdio();
    let service = NewsServer::new(pipeline)
        .serve(framed(stdin, stdout))
        .await
        .map_err(|e| NewsreelError::internal(format!("MCP handshake failed: {}", e)))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| NewsreelError::internal(format!("MCP session task failed: {}", e)))?;

    info!("MCP session ended: {:?}", reason);
    Ok(())
}
