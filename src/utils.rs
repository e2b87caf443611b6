//! Utility functions for the MCP adapters

use serde::de::DeserializeOwned;
use serde_json::{from_value, Value};

use crate::mcp::protocol::{error_codes, Response};

/// Deserializes a tool's `arguments` object into its typed argument struct.
///
/// Missing required fields, wrong types and values outside an enum all end up
/// here as an `INVALID_PARAMS` response.
pub fn parse_args<T: DeserializeOwned>(
    args: &Value,
    tool: &str,
    req_id: &Value,
) -> Result<T, Response> {
    from_value(args.clone()).map_err(|e| {
        Response::error(
            req_id.clone(),
            error_codes::INVALID_PARAMS,
            format!("Invalid arguments for tool '{}': {}", tool, e),
        )
    })
}
