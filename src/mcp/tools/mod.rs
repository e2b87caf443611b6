//! Tool registries for the two adapters.

use async_trait::async_trait;
use serde_json::Value;

use crate::mcp::protocol::{Response, ToolDefinition, ToolResult};

pub mod rugcheck;
pub mod solana;

pub use rugcheck::RugcheckTools;
pub use solana::SolanaTools;

/// A fixed set of tools served over MCP.
#[async_trait]
pub trait ToolService: Send + Sync {
    /// Name reported in `serverInfo`.
    fn server_name(&self) -> &'static str;

    fn instructions(&self) -> &'static str;

    /// Names of every tool in [`ToolService::tools`], in the same order.
    fn tool_names(&self) -> &'static [&'static str];

    fn tools(&self) -> Vec<ToolDefinition>;

    /// Runs `name` with `args`.
    ///
    /// `Err` is reserved for calls that never reach a handler (unknown tool,
    /// arguments that do not fit the schema). Remote failures come back as
    /// `Ok` with an error text.
    async fn call_tool(&self, name: &str, args: &Value, req_id: &Value)
        -> Result<ToolResult, Response>;

    fn has_tool(&self, name: &str) -> bool {
        self.tool_names().contains(&name)
    }
}
