//! # Solana tools
//!
//! One tool per Solana JSON-RPC method. Each handler shapes its arguments into
//! positional params and goes through [`RpcClient::call`].
//!
//! ### Accounts
//! - `get_balance`, `get_account_info`, `get_multiple_accounts`, `get_program_accounts`
//!
//! ### Transactions
//! - `get_transaction`, `get_signatures_for_address`, `get_signature_statuses`
//!
//! ### Blocks
//! - `get_block`, `get_block_height`, `get_latest_blockhash`, `get_block_time`
//!
//! ### Tokens
//! - `get_token_account_balance`, `get_token_accounts_by_owner`, `get_token_supply`,
//!   `get_token_largest_accounts`
//!
//! ### Cluster
//! - `get_cluster_nodes`, `get_epoch_info`, `get_version`, `get_health`

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::{
    blockchain::{
        client::{self, RpcClient},
        services::{account, block, cluster, token, transaction},
    },
    mcp::{
        protocol::{error_codes, Response, ToolDefinition, ToolResult},
        schema::SchemaBuilder,
        tools::ToolService,
    },
    utils::parse_args,
};

#[derive(Debug, Clone)]
pub struct SolanaTools {
    rpc: RpcClient,
}

impl SolanaTools {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }
}

const TOOL_NAMES: &[&str] = &[
    "get_balance",
    "get_account_info",
    "get_multiple_accounts",
    "get_program_accounts",
    "get_transaction",
    "get_signatures_for_address",
    "get_signature_statuses",
    "get_block",
    "get_block_height",
    "get_latest_blockhash",
    "get_block_time",
    "get_token_account_balance",
    "get_token_accounts_by_owner",
    "get_token_supply",
    "get_token_largest_accounts",
    "get_cluster_nodes",
    "get_epoch_info",
    "get_version",
    "get_health",
];

fn tool(name: &str, description: &str, schema: SchemaBuilder) -> ToolDefinition {
    ToolDefinition {
        name: name.into(),
        description: description.into(),
        input_schema: schema.build(),
    }
}

fn definitions() -> Vec<ToolDefinition> {
    vec![
        // Accounts
        tool(
            "get_balance",
            "Get the SOL balance (in lamports) of an account",
            SchemaBuilder::new()
                .required("address", "string", "Base58 account address")
                .commitment(),
        ),
        tool(
            "get_account_info",
            "Get all information associated with an account",
            SchemaBuilder::new()
                .required("address", "string", "Base58 account address")
                .commitment()
                .encoding(),
        ),
        tool(
            "get_multiple_accounts",
            "Get account information for a list of accounts",
            SchemaBuilder::new()
                .required("pubkeys", "string", "Comma-separated list of base58 account addresses")
                .commitment()
                .encoding(),
        ),
        tool(
            "get_program_accounts",
            "Get all accounts owned by a program",
            SchemaBuilder::new()
                .required("programId", "string", "Base58 program address")
                .commitment()
                .encoding()
                .optional("dataSize", "integer", "Only return accounts whose data has this length"),
        ),
        // Transactions
        tool(
            "get_transaction",
            "Get details of a confirmed transaction (always jsonParsed)",
            SchemaBuilder::new()
                .required("signature", "string", "Transaction signature")
                .commitment()
                .optional(
                    "maxSupportedTransactionVersion",
                    "integer",
                    "Highest transaction version to return (e.g. 0)",
                ),
        ),
        tool(
            "get_signatures_for_address",
            "Get confirmed transaction signatures involving an address, newest first",
            SchemaBuilder::new()
                .required("address", "string", "Base58 account address")
                .optional("limit", "integer", "Maximum number of signatures to return (1-1000)")
                .optional("before", "string", "Start searching backwards from this signature")
                .optional("until", "string", "Search until this signature")
                .commitment(),
        ),
        tool(
            "get_signature_statuses",
            "Get the statuses of a list of transaction signatures",
            SchemaBuilder::new()
                .required("signatures", "string", "Comma-separated list of transaction signatures")
                .optional(
                    "searchTransactionHistory",
                    "boolean",
                    "Search the ledger beyond the recent status cache",
                ),
        ),
        // Blocks
        tool(
            "get_block",
            "Get a confirmed block with full, jsonParsed transactions",
            SchemaBuilder::new()
                .required("slot", "integer", "Slot number")
                .commitment()
                .optional(
                    "maxSupportedTransactionVersion",
                    "integer",
                    "Highest transaction version to return (e.g. 0)",
                ),
        ),
        tool(
            "get_block_height",
            "Get the current block height of the node",
            SchemaBuilder::new().commitment(),
        ),
        tool(
            "get_latest_blockhash",
            "Get the latest blockhash",
            SchemaBuilder::new().commitment(),
        ),
        tool(
            "get_block_time",
            "Get the estimated production time of a block",
            SchemaBuilder::new().required("slot", "integer", "Slot number"),
        ),
        // Tokens
        tool(
            "get_token_account_balance",
            "Get the token balance of an SPL token account",
            SchemaBuilder::new()
                .required("account", "string", "Base58 token account address")
                .commitment(),
        ),
        tool(
            "get_token_accounts_by_owner",
            "Get all SPL token accounts owned by an address",
            SchemaBuilder::new()
                .required("owner", "string", "Base58 owner address")
                .optional("mint", "string", "Only accounts for this token mint")
                .optional(
                    "programId",
                    "string",
                    "Only accounts owned by this token program (defaults to the SPL token program)",
                )
                .commitment()
                .encoding(),
        ),
        tool(
            "get_token_supply",
            "Get the total supply of an SPL token",
            SchemaBuilder::new()
                .required("mint", "string", "Base58 token mint address")
                .commitment(),
        ),
        tool(
            "get_token_largest_accounts",
            "Get the 20 largest accounts of an SPL token",
            SchemaBuilder::new()
                .required("mint", "string", "Base58 token mint address")
                .commitment(),
        ),
        // Cluster
        tool(
            "get_cluster_nodes",
            "Get information about all nodes in the cluster",
            SchemaBuilder::new(),
        ),
        tool(
            "get_epoch_info",
            "Get information about the current epoch",
            SchemaBuilder::new().commitment(),
        ),
        tool(
            "get_version",
            "Get the Solana version running on the node",
            SchemaBuilder::new(),
        ),
        tool("get_health", "Get the health of the node", SchemaBuilder::new()),
    ]
}

#[async_trait]
impl ToolService for SolanaTools {
    fn server_name(&self) -> &'static str {
        "solana"
    }

    fn instructions(&self) -> &'static str {
        "Solana JSON-RPC MCP server for account, transaction, block, token and cluster queries."
    }

    fn tool_names(&self) -> &'static [&'static str] {
        TOOL_NAMES
    }

    fn tools(&self) -> Vec<ToolDefinition> {
        definitions()
    }

    async fn call_tool(
        &self,
        name: &str,
        args: &Value,
        req_id: &Value,
    ) -> Result<ToolResult, Response> {
        let rpc = &self.rpc;
        let outcome = match name {
            "get_balance" => account::get_balance(rpc, parse_args(args, name, req_id)?).await,
            "get_account_info" => {
                account::get_account_info(rpc, parse_args(args, name, req_id)?).await
            }
            "get_multiple_accounts" => {
                account::get_multiple_accounts(rpc, parse_args(args, name, req_id)?).await
            }
            "get_program_accounts" => {
                account::get_program_accounts(rpc, parse_args(args, name, req_id)?).await
            }
            "get_transaction" => {
                transaction::get_transaction(rpc, parse_args(args, name, req_id)?).await
            }
            "get_signatures_for_address" => {
                transaction::get_signatures_for_address(rpc, parse_args(args, name, req_id)?)
                    .await
            }
            "get_signature_statuses" => {
                transaction::get_signature_statuses(rpc, parse_args(args, name, req_id)?).await
            }
            "get_block" => block::get_block(rpc, parse_args(args, name, req_id)?).await,
            "get_block_height" => {
                block::get_block_height(rpc, parse_args(args, name, req_id)?).await
            }
            "get_latest_blockhash" => {
                block::get_latest_blockhash(rpc, parse_args(args, name, req_id)?).await
            }
            "get_block_time" => block::get_block_time(rpc, parse_args(args, name, req_id)?).await,
            "get_token_account_balance" => {
                token::get_token_account_balance(rpc, parse_args(args, name, req_id)?).await
            }
            "get_token_accounts_by_owner" => {
                token::get_token_accounts_by_owner(rpc, parse_args(args, name, req_id)?).await
            }
            "get_token_supply" => {
                token::get_token_supply(rpc, parse_args(args, name, req_id)?).await
            }
            "get_token_largest_accounts" => {
                token::get_token_largest_accounts(rpc, parse_args(args, name, req_id)?).await
            }
            "get_cluster_nodes" => cluster::get_cluster_nodes(rpc).await,
            "get_epoch_info" => cluster::get_epoch_info(rpc, parse_args(args, name, req_id)?).await,
            "get_version" => cluster::get_version(rpc).await,
            "get_health" => cluster::get_health(rpc).await,
            _ => {
                return Err(Response::error(
                    req_id.clone(),
                    error_codes::METHOD_NOT_FOUND,
                    format!("Unknown tool: {}", name),
                ))
            }
        };

        if let Err(e) = &outcome {
            info!(tool = name, error = %e, "Solana tool call failed");
        }
        Ok(client::render(outcome))
    }
}
