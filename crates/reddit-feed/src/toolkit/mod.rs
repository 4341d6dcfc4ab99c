//! Agent Tools
//!
//! The tool surface over the feed adapter. Domain failures come back as
//! the legacy human-readable strings inside a failed `ToolResult`, never
//! as protocol faults.

mod fetch_comments;
mod frontpage;
mod subreddit;

pub use fetch_comments::FetchCommentsTool;
pub use frontpage::SummarizeFrontpageTool;
pub use subreddit::SummarizeSubredditTool;
