// src/bin/rugcheck_mcp.rs

use anyhow::Result;
use solana_mcp_adapters::{
    blockchain::rugcheck::RugcheckClient,
    config::Config,
    mcp::{server::run_stdio, tools::RugcheckTools},
};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    solana_mcp_adapters::init_tracing();

    let config = Config::default();
    let client = match RugcheckClient::new(&config.rugcheck_api_base) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Failed to initialize RugCheck client: {:#}", e);
            return Err(e);
        }
    };

    let tools = RugcheckTools::new(client);
    if let Err(e) = run_stdio(&tools).await {
        error!("MCP server stopped: {:#}", e);
        return Err(e);
    }
    Ok(())
}
