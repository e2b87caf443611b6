//! # MCP Handler Module
//!
//! Dispatches incoming MCP requests to a [`ToolService`].
//!
//! ## Supported Methods
//! - `initialize` - handshake, reports server info and capabilities
//! - `ping` - liveness check
//! - `tools/list` - the service's tool definitions
//! - `tools/call` - run one tool
//!
//! A request whose method is itself a tool name is treated as a `tools/call`
//! with `params` as the arguments.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::mcp::{
    protocol::{error_codes, Request, Response},
    tools::ToolService,
};

pub const DEFAULT_PROTOCOL_VERSION: &str = "2025-06-18";

/// This is the main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request<S: ToolService + ?Sized>(
    req: Request,
    service: &S,
) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req, service),
        "ping" => Response::success(req.id, json!({})),
        "tools/list" => handle_tools_list(&req, service),
        "tools/call" => handle_tool_call(req, service).await,
        method if service.has_tool(method) => {
            let wrapped = Request {
                jsonrpc: req.jsonrpc.clone(),
                id: req.id.clone(),
                method: "tools/call".to_string(),
                params: Some(json!({
                    "name": method,
                    "arguments": req.params.clone().unwrap_or_else(|| json!({}))
                })),
            };
            handle_tool_call(wrapped, service).await
        }
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

/// Handles a 'tools/call' request by dispatching it to the correct tool.
async fn handle_tool_call<S: ToolService + ?Sized>(req: Request, service: &S) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };

    let empty_args = json!({});
    let args = match params.get("arguments") {
        Some(Value::Null) | None => &empty_args,
        Some(args) => args,
    };

    info!(tool = tool_name, "Calling tool");
    match service.call_tool(tool_name, args, &req.id).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => Response::success(req.id, value),
            Err(e) => Response::error(req.id, error_codes::INTERNAL_ERROR, e.to_string()),
        },
        Err(err_resp) => {
            warn!(tool = tool_name, "Tool call rejected");
            err_resp
        }
    }
}

fn handle_initialize<S: ToolService + ?Sized>(req: &Request, service: &S) -> Response {
    let protocol_version = req
        .params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": {
                "name": service.server_name(),
                "version": env!("CARGO_PKG_VERSION")
            },
            "protocolVersion": protocol_version,
            "capabilities": { "tools": { "listChanged": false } },
            "instructions": service.instructions()
        }),
    )
}

/// Handles the 'tools/list' request by returning every tool definition.
fn handle_tools_list<S: ToolService + ?Sized>(req: &Request, service: &S) -> Response {
    Response::success(req.id.clone(), json!({ "tools": service.tools() }))
}
