// src/blockchain/rugcheck.rs

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header::ACCEPT, Client};
use serde_json::Value;
use tracing::{debug, warn};

use crate::blockchain::error::CallError;
use crate::mcp::protocol::ToolResult;

pub const RUGCHECK_API_BASE: &str = "https://api.rugcheck.xyz/v1";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the RugCheck token report API.
#[derive(Debug, Clone)]
pub struct RugcheckClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl RugcheckClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, FETCH_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client for RugCheck")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn summary_url(&self, token_address: &str) -> String {
        format!("{}/tokens/{}/report/summary", self.base_url, token_address)
    }

    /// Fetches the report summary for `token_address`. The address is passed
    /// through as given.
    pub async fn token_summary(&self, token_address: &str) -> Result<Value, CallError> {
        let url = self.summary_url(token_address);
        debug!(%url, "Fetching token summary");

        let request = async {
            let res = self
                .http
                .get(&url)
                .header(ACCEPT, "application/json")
                .send()
                .await
                .map_err(|e| CallError::from_reqwest(e, self.timeout))?;

            let status = res.status();
            if !status.is_success() {
                return Err(CallError::from_status(status));
            }
            res.json::<Value>()
                .await
                .map_err(|e| CallError::from_reqwest(e, self.timeout))
        };

        match tokio::time::timeout(self.timeout, request).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(%url, "Token summary request timed out");
                Err(CallError::TimedOut(self.timeout))
            }
        }
    }
}

/// Renders a summary fetch as the tool's text result.
pub fn render(outcome: Result<Value, CallError>) -> ToolResult {
    let text = match outcome {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(s) => s,
            Err(e) => format!("Error: {}", e),
        },
        Err(CallError::HttpStatus { code, reason }) => format!(
            "Error: Failed to fetch token summary. Status: {} {}",
            code, reason
        ),
        Err(CallError::TimedOut(after)) => {
            format!("Error: Request timed out after {} seconds", after.as_secs())
        }
        // RugCheck is plain REST, an envelope error cannot occur here.
        Err(CallError::Rpc(error)) => format!("Error: {}", error),
        Err(CallError::Failure(message)) => {
            format!("Error: {}", CallError::failure_message(&message))
        }
    };
    ToolResult::text(text)
}
