//! Feed Adapter
//!
//! Each operation opens one short-lived session, performs bounded reads,
//! projects the results, and drops the session on every exit path. Nested
//! comment fetches inside a feed summary run sequentially and open their
//! own sessions.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::{RedditGateway, RedditSession};
use crate::error::{FeedError, Result};
use crate::model::{CommentNode, SortMode, Submission, SubmissionSummary};

/// Default number of comment bodies per fetch
pub const DEFAULT_COMMENT_LIMIT: usize = 15;

/// Default number of submissions per feed summary
pub const DEFAULT_FEED_LIMIT: u32 = 10;

/// Session-per-call adapter over a reddit gateway
pub struct FeedAdapter {
    gateway: Arc<dyn RedditGateway>,
}

impl FeedAdapter {
    pub fn new(gateway: Arc<dyn RedditGateway>) -> Self {
        Self { gateway }
    }

    async fn connect(&self) -> Result<Box<dyn RedditSession>> {
        self.gateway.connect().await.map_err(|e| match e {
            FeedError::SessionUnavailable(_) => e,
            other => FeedError::SessionUnavailable(other.to_string()),
        })
    }

    /// Top-level comment bodies of one submission.
    ///
    /// Exactly one of `id`/`url` is needed; when both are supplied the url
    /// wins. Placeholder nodes are skipped, never expanded.
    pub async fn fetch_comments(
        &self,
        id: Option<&str>,
        url: Option<&str>,
        limit: usize,
    ) -> Result<Vec<String>> {
        if id.is_none() && url.is_none() {
            return Err(FeedError::InvalidArgument);
        }

        let session = self.connect().await?;

        let submission = if let Some(url) = url {
            session.submission_by_url(url).await?
        } else if let Some(id) = id {
            session.submission_by_id(id).await?
        } else {
            return Err(FeedError::InvalidArgument);
        };

        let nodes = session.top_level_comments(&submission.id).await?;

        let mut bodies = Vec::new();
        let mut count = 0usize;
        for node in nodes {
            let CommentNode::Comment { body } = node else {
                continue;
            };
            // Inclusive boundary: admits limit + 1 bodies. Kept verbatim
            // for compatibility with existing callers.
            if count > limit {
                break;
            }
            count += 1;
            bodies.push(body);
        }

        tracing::debug!(submission = %submission.id, bodies = bodies.len(), "comments fetched");
        Ok(bodies)
    }

    /// Projected mapping of the account's best-ranked front-page
    /// submissions, keyed by submission id
    pub async fn front_page(
        &self,
        limit: u32,
        with_comments: bool,
    ) -> Result<HashMap<String, SubmissionSummary>> {
        let session = self.connect().await?;
        let submissions = session.front_page_best(limit).await?;
        drop(session);

        self.project_all(submissions, with_comments).await
    }

    /// Projected mapping of one subreddit's feed under the given sort
    /// mode, keyed by submission id
    pub async fn subreddit(
        &self,
        name: &str,
        sort: &str,
        limit: u32,
        with_comments: bool,
    ) -> Result<HashMap<String, SubmissionSummary>> {
        let session = self.connect().await?;
        session.validate_subreddit(name).await?;

        let mode: SortMode = sort.parse()?;
        let submissions = if mode.listing_segment().is_some() {
            session.subreddit_listing(name, mode, limit).await?
        } else {
            // Random mode: `limit` independent draws; any failure here
            // reads as the feature being unavailable.
            let mut draws = Vec::with_capacity(limit as usize);
            for _ in 0..limit {
                let submission = session
                    .random_submission(name)
                    .await
                    .map_err(|_| FeedError::RandomUnsupported(name.to_string()))?;
                draws.push(submission);
            }
            draws
        };
        drop(session);

        self.project_all(submissions, with_comments).await
    }

    async fn project_all(
        &self,
        submissions: Vec<Submission>,
        with_comments: bool,
    ) -> Result<HashMap<String, SubmissionSummary>> {
        let mut summaries = HashMap::with_capacity(submissions.len());
        for submission in submissions {
            let comments = if with_comments {
                self.fetch_comments(Some(&submission.id), None, DEFAULT_COMMENT_LIMIT)
                    .await?
            } else {
                Vec::new()
            };
            summaries.insert(
                submission.id.clone(),
                SubmissionSummary::project(&submission, comments),
            );
        }
        Ok(summaries)
    }
}
