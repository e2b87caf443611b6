// src/mcp/tools/rugcheck.rs

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::{
    blockchain::{
        models::TokenSummaryArgs,
        rugcheck::{self, RugcheckClient},
    },
    mcp::{
        protocol::{error_codes, Response, ToolDefinition, ToolResult},
        schema::SchemaBuilder,
        tools::ToolService,
    },
    utils,
};

/// The RugCheck adapter: a single `get_token_summary` tool.
#[derive(Debug, Clone)]
pub struct RugcheckTools {
    client: RugcheckClient,
}

impl RugcheckTools {
    pub fn new(client: RugcheckClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolService for RugcheckTools {
    fn server_name(&self) -> &'static str {
        "rugcheck"
    }

    fn instructions(&self) -> &'static str {
        "RugCheck MCP server. Fetches token risk report summaries for Solana token addresses."
    }

    fn tool_names(&self) -> &'static [&'static str] {
        &["get_token_summary"]
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        vec![ToolDefinition {
            name: "get_token_summary".into(),
            description:
                "Get a token report summary from RugCheck API for a given Solana token address"
                    .into(),
            input_schema: SchemaBuilder::new()
                .required("token_address", "string", "The Solana token contract address")
                .build(),
        }]
    }

    async fn call_tool(
        &self,
        name: &str,
        args: &Value,
        req_id: &Value,
    ) -> Result<ToolResult, Response> {
        match name {
            "get_token_summary" => {
                let args: TokenSummaryArgs = utils::parse_args(args, name, req_id)?;
                info!(token = %args.token_address, "Fetching RugCheck summary");
                let outcome = self.client.token_summary(&args.token_address).await;
                Ok(rugcheck::render(outcome))
            }
            _ => Err(Response::error(
                req_id.clone(),
                error_codes::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", name),
            )),
        }
    }
}
