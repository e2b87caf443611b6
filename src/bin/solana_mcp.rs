// src/bin/solana_mcp.rs

use anyhow::Result;
use solana_mcp_adapters::{
    blockchain::client::RpcClient,
    config::Config,
    mcp::{server::run_stdio, tools::SolanaTools},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    solana_mcp_adapters::init_tracing();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    let rpc = match RpcClient::new(&config.solana_rpc_url) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Failed to initialize Solana RPC client: {:#}", e);
            return Err(e);
        }
    };
    info!("Using Solana RPC endpoint {}", rpc.endpoint());

    let tools = SolanaTools::new(rpc);
    if let Err(e) = run_stdio(&tools).await {
        error!("MCP server stopped: {:#}", e);
        return Err(e);
    }
    Ok(())
}
