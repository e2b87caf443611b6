// src/lib.rs

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod blockchain;
pub mod config;
pub mod mcp;
pub mod utils;

/// Installs the tracing subscriber. Logs go to stderr, stdout carries the protocol.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solana_mcp_adapters=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
