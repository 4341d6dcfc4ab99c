//! Fetch Comments Tool
//!
//! Reads the top-level comment bodies of a single submission.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use mcp_core::{
    Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema, tool::ParameterSchema,
};

use crate::adapter::{DEFAULT_COMMENT_LIMIT, FeedAdapter};

const NAME: &str = "fetch_comments";

/// Tool reading a submission's top-level comments
pub struct FetchCommentsTool {
    adapter: Arc<FeedAdapter>,
}

impl FetchCommentsTool {
    pub fn new(adapter: Arc<FeedAdapter>) -> Self {
        Self { adapter }
    }
}

#[async_trait]
impl Tool for FetchCommentsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description:
                "Reads the top level comments of a reddit submission. Provide the submission id \
                 or its url. Output is an ordered list of comment bodies."
                    .into(),
            parameters: vec![
                ParameterSchema {
                    name: "id".into(),
                    param_type: "string".into(),
                    description: "Submission id (without the t3_ prefix)".into(),
                    required: false,
                    default: None,
                    enum_values: None,
                },
                ParameterSchema {
                    name: "url".into(),
                    param_type: "string".into(),
                    description: "Full submission url; takes precedence when both are given".into(),
                    required: false,
                    default: None,
                    enum_values: None,
                },
                ParameterSchema {
                    name: "limit".into(),
                    param_type: "integer".into(),
                    description: "How many comments to read".into(),
                    required: false,
                    default: Some(json!(DEFAULT_COMMENT_LIMIT)),
                    enum_values: None,
                },
            ],
            category: Some("reddit".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let id = call.arguments.get("id").and_then(|v| v.as_str());
        let url = call.arguments.get("url").and_then(|v| v.as_str());
        let limit = call
            .arguments
            .get("limit")
            .and_then(serde_json::Value::as_u64)
            .map_or(DEFAULT_COMMENT_LIMIT, |v| v as usize);

        match self.adapter.fetch_comments(id, url, limit).await {
            Ok(bodies) => {
                let data = serde_json::to_value(&bodies)?;
                Ok(ToolResult::success(NAME, data.to_string()).with_data(data))
            }
            Err(e) => Ok(ToolResult::failure(NAME, e.user_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockRedditGateway;
    use crate::model::{CommentNode, Submission};
    use std::collections::HashMap;

    fn tool(gateway: MockRedditGateway) -> FetchCommentsTool {
        FetchCommentsTool::new(Arc::new(FeedAdapter::new(Arc::new(gateway))))
    }

    fn call(arguments: HashMap<String, serde_json::Value>) -> ToolCall {
        ToolCall {
            name: NAME.into(),
            arguments,
            id: None,
        }
    }

    fn fixture() -> MockRedditGateway {
        MockRedditGateway::new().with_submission(
            Submission {
                id: "abc".into(),
                title: "t".into(),
                subreddit: "rust".into(),
                is_self: false,
                permalink: "/r/rust/comments/abc/t/".into(),
            },
            vec![
                CommentNode::Comment { body: "first".into() },
                CommentNode::More,
                CommentNode::Comment { body: "second".into() },
            ],
        )
    }

    #[tokio::test]
    async fn test_missing_arguments_message() {
        let tool = tool(MockRedditGateway::new());
        let result = tool.execute(&call(HashMap::new())).await.unwrap();

        assert!(!result.success);
        assert_eq!(result.output, "Invalid argumnts.");
    }

    #[tokio::test]
    async fn test_offline_gateway_message() {
        let tool = tool(MockRedditGateway::offline());
        let mut arguments = HashMap::new();
        arguments.insert("id".to_string(), json!("abc"));

        let result = tool.execute(&call(arguments)).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "Cannot access the reddit client.");
    }

    #[tokio::test]
    async fn test_comment_bodies_returned() {
        let tool = tool(fixture());
        let mut arguments = HashMap::new();
        arguments.insert("id".to_string(), json!("abc"));

        let result = tool.execute(&call(arguments)).await.unwrap();
        assert!(result.success);
        assert_eq!(result.data, Some(json!(["first", "second"])));
    }

    #[tokio::test]
    async fn test_url_argument() {
        let tool = tool(fixture());
        let mut arguments = HashMap::new();
        arguments.insert(
            "url".to_string(),
            json!("https://www.reddit.com/r/rust/comments/abc/t/"),
        );

        let result = tool.execute(&call(arguments)).await.unwrap();
        assert!(result.success);
    }
}
