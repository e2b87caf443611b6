//! Tests for the MCP request loop

use mockito::{mock, Matcher};
use serde_json::{json, Value};
use solana_mcp_adapters::{
    blockchain::{client::RpcClient, rugcheck::RugcheckClient},
    mcp::{
        protocol::error_codes,
        server::serve,
        tools::{RugcheckTools, SolanaTools, ToolService},
    },
};

async fn run_lines<S: ToolService>(service: &S, lines: &[Value]) -> Vec<Value> {
    let mut input = String::new();
    for line in lines {
        input.push_str(&line.to_string());
        input.push('\n');
    }
    let mut output = Vec::new();
    serve(input.as_bytes(), &mut output, service).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn offline_rugcheck() -> RugcheckTools {
    RugcheckTools::new(RugcheckClient::new("http://127.0.0.1:9").unwrap())
}

#[tokio::test]
async fn test_initialize_and_list() {
    let responses = run_lines(
        &offline_rugcheck(),
        &[
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": { "protocolVersion": "2024-11-05" } }),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
        ],
    )
    .await;

    // The notification gets no reply.
    assert_eq!(responses.len(), 2);

    let init = &responses[0]["result"];
    assert_eq!(init["serverInfo"]["name"], "rugcheck");
    assert_eq!(init["serverInfo"]["version"], "1.0.0");
    assert_eq!(init["protocolVersion"], "2024-11-05");
    assert_eq!(init["capabilities"]["tools"]["listChanged"], false);

    let tools = responses[1]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "get_token_summary");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["token_address"]));
}

#[tokio::test]
async fn test_protocol_errors() {
    let mut input = String::from("{not json\n\n");
    input.push_str(&json!({ "jsonrpc": "2.0", "id": 3, "method": "resources/list" }).to_string());
    input.push('\n');
    input.push_str(
        &json!({ "jsonrpc": "2.0", "id": 4, "method": "tools/call", "params": { "arguments": {} } })
            .to_string(),
    );
    input.push('\n');

    let mut output = Vec::new();
    serve(input.as_bytes(), &mut output, &offline_rugcheck())
        .await
        .unwrap();
    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["error"]["code"], error_codes::PARSE_ERROR);
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[1]["error"]["code"], error_codes::METHOD_NOT_FOUND);
    assert_eq!(responses[2]["error"]["code"], error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_ping() {
    let responses = run_lines(
        &offline_rugcheck(),
        &[json!({ "jsonrpc": "2.0", "id": "p", "method": "ping" })],
    )
    .await;
    assert_eq!(responses[0]["id"], "p");
    assert_eq!(responses[0]["result"], json!({}));
}

#[tokio::test]
async fn test_tool_call_returns_single_text_segment() {
    let _m = mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({ "method": "getHealth", "params": [] })))
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","id":1,"result":"ok"}"#)
        .create();

    let service = SolanaTools::new(RpcClient::new(&mockito::server_url()).unwrap());
    let responses = run_lines(
        &service,
        &[
            json!({ "jsonrpc": "2.0", "id": 7, "method": "tools/call", "params": { "name": "get_health" } }),
            // Direct alias for the same tool.
            json!({ "jsonrpc": "2.0", "id": 8, "method": "get_health" }),
        ],
    )
    .await;

    for (resp, id) in responses.iter().zip([7, 8]) {
        assert_eq!(resp["id"], id);
        assert_eq!(
            resp["result"],
            json!({ "content": [{ "type": "text", "text": "\"ok\"" }] })
        );
    }
}

#[tokio::test]
async fn test_remote_failure_is_still_a_result() {
    let _m = mock("POST", "/").with_status(502).create();

    let service = SolanaTools::new(RpcClient::new(&mockito::server_url()).unwrap());
    let responses = run_lines(
        &service,
        &[json!({
            "jsonrpc": "2.0",
            "id": 9,
            "method": "tools/call",
            "params": { "name": "get_token_supply", "arguments": { "mint": "Mint1" } }
        })],
    )
    .await;

    assert!(responses[0].get("error").is_none());
    assert_eq!(
        responses[0]["result"]["content"][0]["text"],
        "Error: 502 Bad Gateway"
    );
}
