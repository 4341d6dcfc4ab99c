//! Mock Reddit Gateway
//!
//! In-memory fixture gateway for testing and demo purposes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{RedditGateway, RedditSession};
use crate::error::{FeedError, Result};
use crate::model::{CommentNode, SortMode, Submission};

/// Fixture data for one subreddit
#[derive(Clone, Debug, Default)]
struct SubredditFixture {
    /// Submission ids in listing order
    listing: Vec<String>,

    /// Whether the random-submission feature is allowed
    random_enabled: bool,
}

/// Mock gateway with fixture submissions and subreddits
#[derive(Clone, Default)]
pub struct MockRedditGateway {
    offline: bool,
    submissions: HashMap<String, Submission>,
    comments: HashMap<String, Vec<CommentNode>>,
    front_page: Vec<String>,
    subreddits: HashMap<String, SubredditFixture>,
}

impl MockRedditGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose every connect attempt fails
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Add a submission and its top-level comment forest
    #[must_use]
    pub fn with_submission(mut self, submission: Submission, comments: Vec<CommentNode>) -> Self {
        self.comments.insert(submission.id.clone(), comments);
        self.submissions.insert(submission.id.clone(), submission);
        self
    }

    /// Set the front-page listing (submission ids in rank order)
    #[must_use]
    pub fn with_front_page(mut self, ids: &[&str]) -> Self {
        self.front_page = ids.iter().map(|id| (*id).to_string()).collect();
        self
    }

    /// Add a subreddit with its listing and random-feature flag
    #[must_use]
    pub fn with_subreddit(mut self, name: &str, ids: &[&str], random_enabled: bool) -> Self {
        self.subreddits.insert(
            name.to_string(),
            SubredditFixture {
                listing: ids.iter().map(|id| (*id).to_string()).collect(),
                random_enabled,
            },
        );
        self
    }
}

#[async_trait]
impl RedditGateway for MockRedditGateway {
    async fn connect(&self) -> Result<Box<dyn RedditSession>> {
        if self.offline {
            return Err(FeedError::SessionUnavailable("mock gateway offline".into()));
        }
        Ok(Box::new(MockRedditSession {
            data: self.clone(),
            random_cursor: AtomicUsize::new(0),
        }))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

struct MockRedditSession {
    data: MockRedditGateway,
    random_cursor: AtomicUsize,
}

impl MockRedditSession {
    fn submission(&self, id: &str) -> Result<Submission> {
        self.data
            .submissions
            .get(id)
            .cloned()
            .ok_or_else(|| FeedError::Remote(format!("submission not found: {id}")))
    }

    fn by_ids(&self, ids: &[String], limit: u32) -> Result<Vec<Submission>> {
        ids.iter()
            .take(limit as usize)
            .map(|id| self.submission(id))
            .collect()
    }
}

#[async_trait]
impl RedditSession for MockRedditSession {
    async fn submission_by_id(&self, id: &str) -> Result<Submission> {
        self.submission(id)
    }

    async fn submission_by_url(&self, url: &str) -> Result<Submission> {
        self.data
            .submissions
            .values()
            .find(|s| url.ends_with(&s.permalink))
            .cloned()
            .ok_or_else(|| FeedError::Remote(format!("submission not found: {url}")))
    }

    async fn top_level_comments(&self, submission_id: &str) -> Result<Vec<CommentNode>> {
        Ok(self
            .data
            .comments
            .get(submission_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn front_page_best(&self, limit: u32) -> Result<Vec<Submission>> {
        self.by_ids(&self.data.front_page, limit)
    }

    async fn validate_subreddit(&self, name: &str) -> Result<()> {
        if self.data.subreddits.contains_key(name) {
            Ok(())
        } else {
            Err(FeedError::InvalidSubreddit(name.to_string()))
        }
    }

    async fn subreddit_listing(
        &self,
        name: &str,
        sort: SortMode,
        limit: u32,
    ) -> Result<Vec<Submission>> {
        if sort.listing_segment().is_none() {
            return Err(FeedError::RandomUnsupported(name.to_string()));
        }
        let fixture = self
            .data
            .subreddits
            .get(name)
            .ok_or_else(|| FeedError::InvalidSubreddit(name.to_string()))?;
        self.by_ids(&fixture.listing, limit)
    }

    async fn random_submission(&self, name: &str) -> Result<Submission> {
        let fixture = self
            .data
            .subreddits
            .get(name)
            .ok_or_else(|| FeedError::InvalidSubreddit(name.to_string()))?;
        if !fixture.random_enabled || fixture.listing.is_empty() {
            return Err(FeedError::RandomUnsupported(name.to_string()));
        }

        // Rotate through the listing so repeated draws vary but stay
        // deterministic for assertions
        let index = self.random_cursor.fetch_add(1, Ordering::Relaxed) % fixture.listing.len();
        self.submission(&fixture.listing[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(id: &str) -> Submission {
        Submission {
            id: id.into(),
            title: format!("title {id}"),
            subreddit: "rust".into(),
            is_self: false,
            permalink: format!("/r/rust/comments/{id}/title/"),
        }
    }

    #[tokio::test]
    async fn test_mock_front_page() {
        let gateway = MockRedditGateway::new()
            .with_submission(submission("a"), vec![])
            .with_submission(submission("b"), vec![])
            .with_front_page(&["a", "b"]);

        let session = gateway.connect().await.unwrap();
        let page = session.front_page_best(1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "a");
    }

    #[tokio::test]
    async fn test_offline_gateway() {
        let gateway = MockRedditGateway::offline();
        let result = gateway.connect().await;
        assert!(matches!(result, Err(FeedError::SessionUnavailable(_))));
    }

    #[tokio::test]
    async fn test_random_rotation() {
        let gateway = MockRedditGateway::new()
            .with_submission(submission("a"), vec![])
            .with_submission(submission("b"), vec![])
            .with_subreddit("rust", &["a", "b"], true);

        let session = gateway.connect().await.unwrap();
        let first = session.random_submission("rust").await.unwrap();
        let second = session.random_submission("rust").await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_random_disabled() {
        let gateway = MockRedditGateway::new()
            .with_submission(submission("a"), vec![])
            .with_subreddit("askscience", &["a"], false);

        let session = gateway.connect().await.unwrap();
        let result = session.random_submission("askscience").await;
        assert!(matches!(result, Err(FeedError::RandomUnsupported(_))));
    }

    #[tokio::test]
    async fn test_lookup_by_url() {
        let gateway = MockRedditGateway::new().with_submission(submission("a"), vec![]);
        let session = gateway.connect().await.unwrap();

        let found = session
            .submission_by_url("https://www.reddit.com/r/rust/comments/a/title/")
            .await
            .unwrap();
        assert_eq!(found.id, "a");
    }
}
