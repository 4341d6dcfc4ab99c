//! Subreddit Summary Tool
//!
//! Projects a named subreddit's feed under one of the built-in sort modes.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use mcp_core::{
    Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema, tool::ParameterSchema,
};

use crate::adapter::{DEFAULT_FEED_LIMIT, FeedAdapter};
use crate::model::SortMode;

const NAME: &str = "summarize_subreddit";

/// Tool summarizing one subreddit's feed
pub struct SummarizeSubredditTool {
    adapter: Arc<FeedAdapter>,
}

impl SummarizeSubredditTool {
    pub fn new(adapter: Arc<FeedAdapter>) -> Self {
        Self { adapter }
    }
}

#[async_trait]
impl Tool for SummarizeSubredditTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description:
                "Summarizes a subreddit's feed. Sorting options are hot, new, top, rising, \
                 random. Output is a mapping from submission id to submission information; \
                 comments can be included for deeper summaries."
                    .into(),
            parameters: vec![
                ParameterSchema {
                    name: "subreddit_name".into(),
                    param_type: "string".into(),
                    description: "Subreddit name without the 'r/' prefix".into(),
                    required: true,
                    default: None,
                    enum_values: None,
                },
                ParameterSchema {
                    name: "fetch_by".into(),
                    param_type: "string".into(),
                    description: "Sorting/fetching option for the subreddit's feed".into(),
                    required: false,
                    default: Some(json!("hot")),
                    enum_values: Some(
                        SortMode::VALID_MODES.iter().map(|m| json!(m)).collect(),
                    ),
                },
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
        let name = call
            .arguments
            .get("subreddit_name")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        let fetch_by = call
            .arguments
            .get("fetch_by")
            .and_then(|v| v.as_str())
            .unwrap_or("hot");
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

        match self
            .adapter
            .subreddit(name, fetch_by, limit, with_comments)
            .await
        {
            Ok(page) => {
                let data = serde_json::to_value(&page)?;
                Ok(ToolResult::success(NAME, data.to_string()).with_data(data))
            }
            Err(e) => Ok(ToolResult::failure(NAME, e.user_message())),
        }
    }
}
