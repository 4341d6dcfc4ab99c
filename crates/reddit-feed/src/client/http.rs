//! HTTP Reddit Gateway
//!
//! OAuth2 password grant (script app), then bearer GETs against the
//! authenticated API host. Credentials are read at connect time so a
//! misconfigured process still starts and reports per call.

use async_trait::async_trait;

use super::{RedditGateway, RedditSession};
use crate::config::RedditConfig;
use crate::error::{FeedError, Result};
use crate::model::{CommentNode, SortMode, Submission};
use crate::wire::{
    self, CommentPage, Listing, SubmissionData, SubredditAbout, Thing, TokenResponse,
};

/// Token endpoint (HTTP basic auth with client id/secret)
const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Authenticated API host
const API_BASE: &str = "https://oauth.reddit.com";

/// Gateway backed by the live reddit API
#[derive(Default)]
pub struct HttpRedditGateway;

impl HttpRedditGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RedditGateway for HttpRedditGateway {
    async fn connect(&self) -> Result<Box<dyn RedditSession>> {
        let config = RedditConfig::from_env()
            .map_err(|e| FeedError::SessionUnavailable(e.to_string()))?;

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| FeedError::SessionUnavailable(e.to_string()))?;

        let grant = [
            ("grant_type", "password"),
            ("username", config.username.as_str()),
            ("password", config.password.as_str()),
        ];

        let token: TokenResponse = http
            .post(TOKEN_URL)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .form(&grant)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| FeedError::SessionUnavailable(e.to_string()))?
            .json()
            .await
            .map_err(|e| FeedError::SessionUnavailable(e.to_string()))?;

        tracing::debug!(user = %config.username, "reddit session established");

        Ok(Box::new(HttpRedditSession {
            http,
            bearer: token.access_token,
        }))
    }

    fn name(&self) -> &str {
        "reddit-oauth"
    }
}

struct HttpRedditSession {
    http: reqwest::Client,
    bearer: String,
}

impl HttpRedditSession {
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .http
            .get(format!("{API_BASE}{path}"))
            .bearer_auth(&self.bearer)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    fn submissions(listing: Listing<SubmissionData>) -> Vec<Submission> {
        listing
            .data
            .children
            .into_iter()
            .filter(|child| child.kind == wire::KIND_SUBMISSION)
            .map(|child| child.data.into())
            .collect()
    }

    fn first_submission(listing: Listing<SubmissionData>) -> Result<Submission> {
        Self::submissions(listing)
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::Remote("submission not found".into()))
    }
}

#[async_trait]
impl RedditSession for HttpRedditSession {
    async fn submission_by_id(&self, id: &str) -> Result<Submission> {
        let fullname = format!("{}_{id}", wire::KIND_SUBMISSION);
        let listing: Listing<SubmissionData> =
            self.get_json("/api/info", &[("id", fullname)]).await?;
        Self::first_submission(listing)
    }

    async fn submission_by_url(&self, url: &str) -> Result<Submission> {
        let listing: Listing<SubmissionData> = self
            .get_json("/api/info", &[("url", url.to_string())])
            .await?;
        Self::first_submission(listing)
    }

    async fn top_level_comments(&self, submission_id: &str) -> Result<Vec<CommentNode>> {
        // depth=1 keeps the response to the top-level forest
        let page: CommentPage = self
            .get_json(
                &format!("/comments/{submission_id}"),
                &[("depth", "1".to_string())],
            )
            .await?;

        Ok(page.1.data.children.into_iter().map(wire::comment_node).collect())
    }

    async fn front_page_best(&self, limit: u32) -> Result<Vec<Submission>> {
        let listing: Listing<SubmissionData> = self
            .get_json("/best", &[("limit", limit.to_string())])
            .await?;
        Ok(Self::submissions(listing))
    }

    async fn validate_subreddit(&self, name: &str) -> Result<()> {
        let about: Thing<SubredditAbout> = self
            .get_json(&format!("/r/{name}/about"), &[])
            .await
            .map_err(|_| FeedError::InvalidSubreddit(name.to_string()))?;

        if about.kind == wire::KIND_SUBREDDIT {
            tracing::debug!(subreddit = %about.data.display_name, "subreddit validated");
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
        let Some(segment) = sort.listing_segment() else {
            return Err(FeedError::RandomUnsupported(name.to_string()));
        };

        let listing: Listing<SubmissionData> = self
            .get_json(
                &format!("/r/{name}/{segment}"),
                &[("limit", limit.to_string())],
            )
            .await?;
        Ok(Self::submissions(listing))
    }

    async fn random_submission(&self, name: &str) -> Result<Submission> {
        // Subreddits that disallow random redirect elsewhere; anything
        // that is not a comments page reads as unsupported.
        let page: CommentPage = self
            .get_json(&format!("/r/{name}/random"), &[])
            .await
            .map_err(|_| FeedError::RandomUnsupported(name.to_string()))?;

        Self::first_submission(page.0)
    }
}
