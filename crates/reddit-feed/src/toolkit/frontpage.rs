//! Front-Page Summary Tool
//!
//! Projects the authenticated account's best-ranked front-page feed.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use mcp_core::{
    Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema, tool::ParameterSchema,
};

use crate::adapter::{DEFAULT_FEED_LIMIT, FeedAdapter};

const NAME: &str = "summarize_frontpage";

/// Tool summarizing the user's reddit front page
pub struct SummarizeFrontpageTool {
    adapter: Arc<FeedAdapter>,
}

impl SummarizeFrontpageTool {
    pub fn new(adapter: Arc<FeedAdapter>) -> Self {
        Self { adapter }
    }
}

#[async_trait]
impl Tool for SummarizeFrontpageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description:
                "Summarizes the user's reddit frontpage (alias: homepage, feed). Output is a \
                 mapping from submission id to submission information; comments can be included \
                 for deeper summaries."
                    .into(),
            parameters: vec![
                ParameterSchema {
                    name: "limit".into(),
                    param_type: "integer".into(),
                    description: "How many posts to fetch".into(),
                    required: false,
                    default: Some(json!(DEFAULT_FEED_LIMIT)),
                    enum_values: None,
                },
                ParameterSchema {
                    name: "with_comments".into(),
                    param_type: "boolean".into(),
                    description: "Include top-level comments in each entry".into(),
                    required: false,
                    default: Some(json!(false)),
                    enum_values: None,
                },
            ],
            category: Some("reddit".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let limit = call
            .arguments
            .get("limit")
            .and_then(serde_json::Value::as_u64)
            .map_or(DEFAULT_FEED_LIMIT, |v| v as u32);
        let with_comments = call
            .arguments
            .get("with_comments")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);

        match self.adapter.front_page(limit, with_comments).await {
            Ok(page) => {
                let data = serde_json::to_value(&page)?;
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

    fn submission(id: &str) -> Submission {
        Submission {
            id: id.into(),
            title: format!("title {id}"),
            subreddit: "news".into(),
            is_self: false,
            permalink: format!("/r/news/comments/{id}/title/"),
        }
    }

    fn tool(gateway: MockRedditGateway) -> SummarizeFrontpageTool {
        SummarizeFrontpageTool::new(Arc::new(FeedAdapter::new(Arc::new(gateway))))
    }

    fn call(arguments: HashMap<String, serde_json::Value>) -> ToolCall {
        ToolCall {
            name: NAME.into(),
            arguments,
            id: None,
        }
    }

    #[tokio::test]
    async fn test_defaults_exclude_comments() {
        let gateway = MockRedditGateway::new()
            .with_submission(submission("aa"), vec![CommentNode::Comment { body: "c".into() }])
            .with_front_page(&["aa"]);

        let result = tool(gateway).execute(&call(HashMap::new())).await.unwrap();
        assert!(result.success);

        let data = result.data.unwrap();
        assert_eq!(data["aa"]["comments"], json!([]));
    }

    #[tokio::test]
    async fn test_with_comments() {
        let gateway = MockRedditGateway::new()
            .with_submission(submission("aa"), vec![CommentNode::Comment { body: "c".into() }])
            .with_front_page(&["aa"]);

        let mut arguments = HashMap::new();
        arguments.insert("with_comments".to_string(), json!(true));

        let result = tool(gateway).execute(&call(arguments)).await.unwrap();
        let data = result.data.unwrap();
        assert_eq!(data["aa"]["comments"], json!(["c"]));
    }

    #[tokio::test]
    async fn test_offline_gateway_message() {
        let result = tool(MockRedditGateway::offline())
            .execute(&call(HashMap::new()))
            .await
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "Cannot access the reddit client.");
    }
}
