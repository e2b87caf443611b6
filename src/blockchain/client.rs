//! Solana JSON-RPC client.
//!
//! Every Solana tool funnels through [`RpcClient::call`]: one POST per call,
//! a fixed timeout, and a request id taken from a counter owned by the client.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::blockchain::error::CallError;
use crate::mcp::protocol::ToolResult;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Outbound JSON-RPC 2.0 request body.
#[derive(Debug, Serialize)]
pub struct RpcEnvelope<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Vec<Value>,
}

/// Client for a single Solana RPC endpoint.
///
/// Clones share the id counter, so ids stay unique across every clone.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: Client,
    endpoint: String,
    timeout: Duration,
    last_id: Arc<AtomicU64>,
}

impl RpcClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, RPC_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client for Solana RPC")?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            timeout,
            last_id: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Reserves the next request id. Ids start at 1 and only grow.
    pub fn next_id(&self) -> u64 {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Issues `method` with positional `params` and returns the `result` member.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, CallError> {
        // The id is fixed here, before the first await.
        let envelope = RpcEnvelope {
            jsonrpc: "2.0",
            id: self.next_id(),
            method,
            params,
        };
        debug!(id = envelope.id, method, "Sending RPC request");

        match tokio::time::timeout(self.timeout, self.send(&envelope)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(id = envelope.id, method, "RPC request timed out");
                Err(CallError::TimedOut(self.timeout))
            }
        }
    }

    async fn send(&self, envelope: &RpcEnvelope<'_>) -> Result<Value, CallError> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(envelope)
            .send()
            .await
            .map_err(|e| CallError::from_reqwest(e, self.timeout))?;

        let status = res.status();
        if !status.is_success() {
            return Err(CallError::from_status(status));
        }

        let mut body: Value = res
            .json()
            .await
            .map_err(|e| CallError::from_reqwest(e, self.timeout))?;

        // Some gateways send `"error": null` alongside a good result.
        if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
            return Err(CallError::Rpc(error.clone()));
        }
        Ok(body
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}

/// Renders the outcome of an RPC call as the tool's text result.
pub fn render(outcome: Result<Value, CallError>) -> ToolResult {
    let text = match outcome {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(s) => s,
            Err(e) => format!("Error: {}", e),
        },
        Err(CallError::HttpStatus { code, reason }) => format!("Error: {} {}", code, reason),
        Err(CallError::Rpc(error)) => format!("RPC Error: {}", error),
        Err(CallError::TimedOut(after)) => {
            format!("Error: Request timed out after {}s", after.as_secs())
        }
        Err(CallError::Failure(message)) => {
            format!("Error: {}", CallError::failure_message(&message))
        }
    };
    ToolResult::text(text)
}
