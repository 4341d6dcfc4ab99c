//! Reddit Client
//!
//! Abstractions and implementations for the remote reddit service.
//! Sessions are ephemeral: one per operation, released by drop on every
//! exit path.

mod http;
mod mock;

pub use http::HttpRedditGateway;
pub use mock::MockRedditGateway;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{CommentNode, SortMode, Submission};

/// Gateway trait (Strategy pattern)
///
/// Implement this per backend: live OAuth HTTP, fixtures, etc.
#[async_trait]
pub trait RedditGateway: Send + Sync {
    /// Open an authenticated session against the remote service
    async fn connect(&self) -> Result<Box<dyn RedditSession>>;

    /// Gateway name
    fn name(&self) -> &str;
}

/// One authenticated, short-lived session
#[async_trait]
pub trait RedditSession: Send + Sync {
    /// Resolve a submission by its identifier (without the `t3_` prefix)
    async fn submission_by_id(&self, id: &str) -> Result<Submission>;

    /// Resolve a submission by its full url
    async fn submission_by_url(&self, url: &str) -> Result<Submission>;

    /// Top-level comment forest in the remote service's default order,
    /// placeholder nodes included
    async fn top_level_comments(&self, submission_id: &str) -> Result<Vec<CommentNode>>;

    /// Up to `limit` best-ranked submissions from the account's front page
    async fn front_page_best(&self, limit: u32) -> Result<Vec<Submission>>;

    /// Check that a subreddit exists and is visible
    async fn validate_subreddit(&self, name: &str) -> Result<()>;

    /// Up to `limit` submissions from one bounded listing
    async fn subreddit_listing(
        &self,
        name: &str,
        sort: SortMode,
        limit: u32,
    ) -> Result<Vec<Submission>>;

    /// One random submission, where the subreddit allows it
    async fn random_submission(&self, name: &str) -> Result<Submission>;
}
