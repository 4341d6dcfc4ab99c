//! MCP Protocol Types
//!
//! JSON-RPC 2.0 envelopes and the MCP request/result payloads this server
//! understands. Field names follow the MCP wire format (camelCase).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// JSON-RPC protocol version
pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol revision implemented by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// Standard JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Incoming JSON-RPC request or notification
#[derive(Clone, Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,

    /// Absent for notifications
    #[serde(default)]
    pub id: Option<Value>,

    pub method: String,

    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications carry no id and expect no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Outgoing JSON-RPC response
#[derive(Clone, Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,

    pub id: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// JSON-RPC error object
#[derive(Clone, Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Server identity reported during initialize
#[derive(Clone, Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Capability advertisement; empty objects mean "supported"
#[derive(Clone, Debug, Default, Serialize)]
pub struct ServerCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts: Option<Value>,
}

/// Result payload for `initialize`
#[derive(Clone, Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,

    pub capabilities: ServerCapabilities,

    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

/// One tool entry in `tools/list`
#[derive(Clone, Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,

    pub description: String,

    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result payload for `tools/list`
#[derive(Clone, Debug, Serialize)]
pub struct ToolsListResult {
    pub tools: Vec<ToolDescriptor>,
}

/// Parameters of `tools/call`
#[derive(Clone, Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,

    #[serde(default)]
    pub arguments: Option<HashMap<String, Value>>,
}

/// A single content block in a tool or prompt result
#[derive(Clone, Debug, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub content_type: &'static str,

    pub text: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text",
            text: text.into(),
        }
    }
}

/// Result payload for `tools/call`
#[derive(Clone, Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<ContentBlock>,

    #[serde(rename = "isError")]
    pub is_error: bool,
}

/// One prompt entry in `prompts/list`
#[derive(Clone, Debug, Serialize)]
pub struct PromptDescriptor {
    pub name: String,

    pub description: String,

    /// Always empty; templates here take no arguments
    pub arguments: Vec<Value>,
}

/// Result payload for `prompts/list`
#[derive(Clone, Debug, Serialize)]
pub struct PromptsListResult {
    pub prompts: Vec<PromptDescriptor>,
}

/// Parameters of `prompts/get`
#[derive(Clone, Debug, Deserialize)]
pub struct GetPromptParams {
    pub name: String,
}

/// A message within a `prompts/get` result
#[derive(Clone, Debug, Serialize)]
pub struct PromptMessage {
    pub role: &'static str,
    pub content: ContentBlock,
}

/// Result payload for `prompts/get`
#[derive(Clone, Debug, Serialize)]
pub struct GetPromptResult {
    pub description: String,
    pub messages: Vec<PromptMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_notification_detection() {
        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
                .unwrap();
        assert!(request.is_notification());

        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "method": "ping"})).unwrap();
        assert!(!request.is_notification());
    }

    #[test]
    fn test_response_serialization_omits_empty_halves() {
        let ok = serde_json::to_value(JsonRpcResponse::success(json!(1), json!({}))).unwrap();
        assert!(ok.get("error").is_none());

        let err = serde_json::to_value(JsonRpcResponse::failure(
            json!(2),
            METHOD_NOT_FOUND,
            "no such method",
        ))
        .unwrap();
        assert!(err.get("result").is_none());
        assert_eq!(err["error"]["code"], METHOD_NOT_FOUND);
    }
}
