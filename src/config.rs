// src/config.rs

use std::env;

use anyhow::{Context, Result};
use url::Url;

use crate::blockchain::{client::DEFAULT_RPC_URL, rugcheck::RUGCHECK_API_BASE};

// Configuration is loaded once at startup from the environment (and .env, if present).
#[derive(Clone, Debug)]
pub struct Config {
    /// Solana JSON-RPC endpoint, `SOLANA_RPC_URL` or mainnet-beta.
    pub solana_rpc_url: String,
    /// RugCheck API base. Fixed to the public endpoint.
    pub rugcheck_api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solana_rpc_url: DEFAULT_RPC_URL.to_string(),
            rugcheck_api_base: RUGCHECK_API_BASE.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        Self::from_rpc_url(env::var("SOLANA_RPC_URL").ok())
    }

    /// Builds a configuration from an optional RPC endpoint override.
    pub fn from_rpc_url(rpc_url: Option<String>) -> Result<Self> {
        let solana_rpc_url = match rpc_url.filter(|u| !u.trim().is_empty()) {
            Some(raw) => {
                let parsed = Url::parse(raw.trim())
                    .with_context(|| format!("SOLANA_RPC_URL is not a valid URL: '{}'", raw))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    anyhow::bail!("SOLANA_RPC_URL must use http or https, got '{}'", parsed.scheme());
                }
                raw.trim().to_string()
            }
            None => DEFAULT_RPC_URL.to_string(),
        };

        Ok(Config {
            solana_rpc_url,
            ..Config::default()
        })
    }
}
