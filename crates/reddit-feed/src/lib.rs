//! # reddit-feed
//!
//! Thin feed adapter over reddit for language-model agents.
//!
//! Every operation follows the same shape:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  connect ─▶ bounded reads ─▶ project ─▶ drop session     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Sessions are ephemeral credential-bound handles, created per call and
//! released by drop on every exit path. Pagination, rate limiting, OAuth
//! refresh, and comment-tree traversal stay with the remote service; this
//! crate only selects a feed source, bounds the read, and reshapes the
//! result into plain JSON for the LLM.

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod toolkit;
mod wire;

pub use adapter::{DEFAULT_COMMENT_LIMIT, DEFAULT_FEED_LIMIT, FeedAdapter};
pub use client::{HttpRedditGateway, MockRedditGateway, RedditGateway, RedditSession};
pub use config::RedditConfig;
pub use error::{FeedError, Result};
pub use model::{CommentNode, SortMode, Submission, SubmissionSummary};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::toolkit::{FetchCommentsTool, SummarizeFrontpageTool, SummarizeSubredditTool};
}

/// Name the fixed prompt is registered under
pub const SUMMARIZE_MY_PAGE_PROMPT_NAME: &str = "summarize_my_page";

/// Description shown in prompt listings
pub const SUMMARIZE_MY_PAGE_PROMPT_DESCRIPTION: &str = "Fixed prompt for detailed summary";

/// Fixed prompt for detailed front-page summaries
pub const SUMMARIZE_MY_PAGE_PROMPT: &str = r"Make a summary of the reddit front page via summarize_frontpage function with limit=15 and with_comments=True arguments
    Use comments to get deeper understanding of public opinion about posts.
    Categorise these post into meaningful categories (e.g. politics/eceonomics, humour and meme, cultural/social etc.)

    For each category display context with following format:
    **Number**-**Category Name**:
    - **summary of post with comment analysis** from **Subreddit name**
    use this format for each post
    ";
