// src/blockchain/error.rs

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Why an outbound call did not produce a usable payload.
#[derive(Error, Debug)]
pub enum CallError {
    #[error("request timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
    #[error("http status {code} {reason}")]
    HttpStatus { code: u16, reason: String },
    /// The JSON-RPC envelope carried an `error` member.
    #[error("rpc error: {0}")]
    Rpc(Value),
    #[error("{0}")]
    Failure(String),
}

impl CallError {
    /// Classifies a reqwest error, keeping the client's own timeout distinct.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            CallError::TimedOut(timeout)
        } else {
            CallError::Failure(err.to_string())
        }
    }

    pub fn from_status(status: reqwest::StatusCode) -> Self {
        CallError::HttpStatus {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Message used for the catch-all case, never empty.
    pub fn failure_message(message: &str) -> &str {
        if message.trim().is_empty() {
            "Unknown error"
        } else {
            message
        }
    }
}

impl From<serde_json::Error> for CallError {
    fn from(err: serde_json::Error) -> Self {
        CallError::Failure(err.to_string())
    }
}
