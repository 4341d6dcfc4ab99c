//! MCP Router
//!
//! Turns one JSON-RPC line into at most one response line. Transport is
//! left to the caller; any line-oriented channel works.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::CoreError;
use crate::prompt::PromptRegistry;
use crate::protocol::{
    CallToolParams, CallToolResult, ContentBlock, GetPromptParams, GetPromptResult,
    INTERNAL_ERROR, INVALID_PARAMS, InitializeResult, JSONRPC_VERSION, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION,
    PromptDescriptor, PromptMessage, PromptsListResult, ServerCapabilities, ServerInfo,
    ToolDescriptor, ToolsListResult,
};
use crate::tool::{ToolCall, ToolRegistry};

/// MCP server router over tool and prompt registries
pub struct McpServer {
    name: String,
    version: String,
    tools: Arc<ToolRegistry>,
    prompts: Arc<PromptRegistry>,
}

impl McpServer {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        tools: Arc<ToolRegistry>,
        prompts: Arc<PromptRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            tools,
            prompts,
        }
    }

    /// Handle one incoming line; `None` means nothing should be written back
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("unparseable message: {}", e);
                return Self::encode(JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        if request.is_notification() {
            tracing::debug!(method = %request.method, "notification received");
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        let response = match self.dispatch(&request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse {
                jsonrpc: JSONRPC_VERSION,
                id,
                result: None,
                error: Some(error),
            },
        };
        Self::encode(response)
    }

    async fn dispatch(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> std::result::Result<Value, JsonRpcError> {
        match method {
            "initialize" => Self::to_result(&InitializeResult {
                protocol_version: PROTOCOL_VERSION.into(),
                capabilities: ServerCapabilities {
                    tools: Some(json!({})),
                    prompts: Some(json!({})),
                },
                server_info: ServerInfo {
                    name: self.name.clone(),
                    version: self.version.clone(),
                },
            }),

            "ping" => Ok(json!({})),

            "tools/list" => {
                let tools = self
                    .tools
                    .schemas()
                    .into_iter()
                    .map(|schema| {
                        let input_schema = schema.input_schema();
                        ToolDescriptor {
                            name: schema.name,
                            description: schema.description,
                            input_schema,
                        }
                    })
                    .collect();
                Self::to_result(&ToolsListResult { tools })
            }

            "tools/call" => {
                let params: CallToolParams = Self::parse_params(params)?;
                let call = ToolCall {
                    name: params.name,
                    arguments: params.arguments.unwrap_or_default(),
                    id: None,
                };

                tracing::debug!(tool = %call.name, "tool call");
                match self.tools.execute(&call).await {
                    Ok(result) => Self::to_result(&CallToolResult {
                        content: vec![ContentBlock::text(result.output)],
                        is_error: !result.success,
                    }),
                    Err(e @ (CoreError::ToolNotFound(_) | CoreError::ToolValidation(_))) => {
                        Err(JsonRpcError {
                            code: INVALID_PARAMS,
                            message: e.to_string(),
                        })
                    }
                    Err(e) => Err(JsonRpcError {
                        code: INTERNAL_ERROR,
                        message: e.to_string(),
                    }),
                }
            }

            "prompts/list" => {
                let prompts = self
                    .prompts
                    .list()
                    .into_iter()
                    .map(|prompt| PromptDescriptor {
                        name: prompt.name.clone(),
                        description: prompt.description.clone(),
                        arguments: Vec::new(),
                    })
                    .collect();
                Self::to_result(&PromptsListResult { prompts })
            }

            "prompts/get" => {
                let params: GetPromptParams = Self::parse_params(params)?;
                let prompt = self.prompts.get(&params.name).ok_or_else(|| JsonRpcError {
                    code: INVALID_PARAMS,
                    message: CoreError::PromptNotFound(params.name.clone()).to_string(),
                })?;
                Self::to_result(&GetPromptResult {
                    description: prompt.description.clone(),
                    messages: vec![PromptMessage {
                        role: "user",
                        content: ContentBlock::text(prompt.text.clone()),
                    }],
                })
            }

            _ => Err(JsonRpcError {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {method}"),
            }),
        }
    }

    fn parse_params<T: DeserializeOwned>(
        params: Option<Value>,
    ) -> std::result::Result<T, JsonRpcError> {
        serde_json::from_value(params.unwrap_or_else(|| json!({}))).map_err(|e| JsonRpcError {
            code: INVALID_PARAMS,
            message: format!("Invalid params: {e}"),
        })
    }

    fn to_result<T: Serialize>(payload: &T) -> std::result::Result<Value, JsonRpcError> {
        serde_json::to_value(payload).map_err(|e| JsonRpcError {
            code: INTERNAL_ERROR,
            message: e.to_string(),
        })
    }

    fn encode(response: JsonRpcResponse) -> Option<String> {
        match serde_json::to_string(&response) {
            Ok(encoded) => Some(encoded),
            Err(e) => {
                tracing::error!("failed to encode response: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptDefinition;
    use crate::tool::{ParameterSchema, Tool, ToolResult, ToolSchema};
    use async_trait::async_trait;

    struct ShoutTool;

    #[async_trait]
    impl Tool for ShoutTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "shout".into(),
                description: "Uppercase the input".into(),
                parameters: vec![ParameterSchema {
                    name: "text".into(),
                    param_type: "string".into(),
                    description: "Text to shout".into(),
                    required: true,
                    default: None,
                    enum_values: None,
                }],
                category: None,
                has_side_effects: false,
            }
        }

        async fn execute(&self, call: &ToolCall) -> crate::error::Result<ToolResult> {
            let text = call
                .arguments
                .get("text")
                .and_then(|v| v.as_str())
                .unwrap_or_default();
            if text.is_empty() {
                return Ok(ToolResult::failure("shout", "nothing to shout"));
            }
            Ok(ToolResult::success("shout", text.to_uppercase()))
        }
    }

    fn server() -> McpServer {
        let mut tools = ToolRegistry::new();
        tools.register(ShoutTool);
        let mut prompts = PromptRegistry::new();
        prompts.register(PromptDefinition::new("greet", "A greeting", "Hello there."));
        McpServer::new("test-server", "0.0.1", Arc::new(tools), Arc::new(prompts))
    }

    async fn roundtrip(server: &McpServer, request: Value) -> Value {
        let line = server
            .handle_line(&request.to_string())
            .await
            .expect("expected a response");
        serde_json::from_str(&line).unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = server();
        let response = roundtrip(
            &server,
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        )
        .await;

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], "test-server");
        assert!(response["result"]["capabilities"]["tools"].is_object());
        assert!(response["result"]["capabilities"]["prompts"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = server();
        let response = roundtrip(
            &server,
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        )
        .await;

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "shout");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn test_tools_call_success_and_failure() {
        let server = server();
        let ok = roundtrip(
            &server,
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
                   "params": {"name": "shout", "arguments": {"text": "hi"}}}),
        )
        .await;
        assert_eq!(ok["result"]["isError"], false);
        assert_eq!(ok["result"]["content"][0]["text"], "HI");

        let failed = roundtrip(
            &server,
            json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call",
                   "params": {"name": "shout", "arguments": {"text": ""}}}),
        )
        .await;
        assert_eq!(failed["result"]["isError"], true);
        assert_eq!(failed["result"]["content"][0]["text"], "nothing to shout");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let server = server();
        let response = roundtrip(
            &server,
            json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call",
                   "params": {"name": "missing"}}),
        )
        .await;
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_prompts_get() {
        let server = server();
        let response = roundtrip(
            &server,
            json!({"jsonrpc": "2.0", "id": 6, "method": "prompts/get",
                   "params": {"name": "greet"}}),
        )
        .await;
        assert_eq!(response["result"]["messages"][0]["role"], "user");
        assert_eq!(
            response["result"]["messages"][0]["content"]["text"],
            "Hello there."
        );
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = server();
        let response = roundtrip(
            &server,
            json!({"jsonrpc": "2.0", "id": 7, "method": "resources/list"}),
        )
        .await;
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_parse_error() {
        let server = server();
        let line = server.handle_line("{not json").await.unwrap();
        let response: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(response["error"]["code"], PARSE_ERROR);
        assert!(response["id"].is_null());
    }

    #[tokio::test]
    async fn test_notification_produces_no_response() {
        let server = server();
        let response = server
            .handle_line(r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_blank_line_ignored() {
        let server = server();
        assert!(server.handle_line("   ").await.is_none());
    }
}
