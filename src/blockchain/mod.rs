// src/blockchain/mod.rs

// Solana JSON-RPC client and the RugCheck REST client
pub mod client;
pub mod rugcheck;
pub use client::RpcClient;
pub use rugcheck::RugcheckClient;

pub mod error;
pub mod models;
pub mod services;
