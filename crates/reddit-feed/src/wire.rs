//! Reddit Wire Types
//!
//! serde models for the remote service's JSON envelopes, kept separate
//! from the domain types in `model` and converted at the client boundary.

use serde::Deserialize;

use crate::model::{CommentNode, Submission};

pub(crate) const KIND_SUBMISSION: &str = "t3";
pub(crate) const KIND_COMMENT: &str = "t1";
pub(crate) const KIND_SUBREDDIT: &str = "t5";

/// Generic `{kind, data}` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct Thing<T> {
    #[serde(default)]
    pub kind: String,
    pub data: T,
}

/// Paginated container of things
#[derive(Debug, Deserialize)]
pub(crate) struct Listing<T> {
    pub data: ListingBody<T>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub(crate) struct ListingBody<T> {
    #[serde(default)]
    pub children: Vec<Thing<T>>,
}

/// Submission fields we project
#[derive(Debug, Deserialize)]
pub(crate) struct SubmissionData {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub permalink: String,
}

impl From<SubmissionData> for Submission {
    fn from(data: SubmissionData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            subreddit: data.subreddit,
            is_self: data.is_self,
            permalink: data.permalink,
        }
    }
}

/// Comment fields; `more` placeholder nodes carry no body
#[derive(Debug, Deserialize)]
pub(crate) struct CommentData {
    #[serde(default)]
    pub body: Option<String>,
}

pub(crate) fn comment_node(thing: Thing<CommentData>) -> CommentNode {
    match (thing.kind.as_str(), thing.data.body) {
        (KIND_COMMENT, Some(body)) => CommentNode::Comment { body },
        _ => CommentNode::More,
    }
}

/// A comments page: the submission listing followed by its comment forest
pub(crate) type CommentPage = (Listing<SubmissionData>, Listing<CommentData>);

/// Subreddit `about` payload
#[derive(Debug, Deserialize)]
pub(crate) struct SubredditAbout {
    #[serde(default)]
    pub display_name: String,
}

/// OAuth token grant response
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}
