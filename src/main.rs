//! FoodLog
//!
//! An MCP server for searching foods and logging what was eaten each day.

use foodlog::build_info;
use foodlog::config::Config;
use foodlog::mcp::FoodLogService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr; stdout carries the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("foodlog=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    build_info::print_startup_banner(&config);
    tracing::info!("Starting MCP server on stdio");

    let service = FoodLogService::new(config);
    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
