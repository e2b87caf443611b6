// src/mcp/server.rs

use anyhow::{Context, Result};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::mcp::{
    handler::handle_mcp_request,
    protocol::{error_codes, Request, Response},
    tools::ToolService,
};

/// Serves `service` over this process's stdin/stdout.
pub async fn run_stdio<S: ToolService>(service: &S) -> Result<()> {
    info!("🚀 Starting {} MCP server on stdin/stdout...", service.server_name());
    serve(BufReader::new(io::stdin()), io::stdout(), service).await
}

/// Reads newline-delimited JSON-RPC requests from `reader` and writes one
/// response line per request to `writer`, until EOF.
pub async fn serve<R, W, S>(mut reader: R, mut writer: W, service: &S) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: ToolService + ?Sized,
{
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .await
            .context("Failed to read from stdin")?;
        if read == 0 {
            info!("EOF received, shutting down MCP server");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        debug!("Received: {}", trimmed);

        let response = match serde_json::from_str::<Request>(trimmed) {
            Ok(request) => handle_mcp_request(request, service).await,
            Err(parse_error) => {
                error!("JSON parse error: {}", parse_error);
                Some(Response::error(
                    serde_json::Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {}", parse_error),
                ))
            }
        };

        if let Some(response) = response {
            let response_json =
                serde_json::to_string(&response).context("Failed to encode response")?;
            debug!("Sending: {}", response_json);
            writer
                .write_all(format!("{}\n", response_json).as_bytes())
                .await
                .context("Failed to write response")?;
            writer.flush().await.context("Failed to flush response")?;
        }
    }

    info!("MCP server shutting down");
    Ok(())
}
