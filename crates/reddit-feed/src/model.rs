//! Domain Models
//!
//! Core data types for feed projection. Wire-format envelopes live in
//! `wire`; nothing here outlives a single tool invocation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FeedError;

/// A submission (post) on the remote service
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    /// Submission identifier (without the `t3_` kind prefix)
    pub id: String,

    /// Title text
    pub title: String,

    /// Name of the subreddit it was posted to
    pub subreddit: String,

    /// Whether the submission is text-only (a self post)
    pub is_self: bool,

    /// Site-relative permalink (e.g. `/r/rust/comments/abc123/title/`)
    pub permalink: String,
}

impl Submission {
    /// Caller-facing url: the literal host prefix plus the permalink
    pub fn canonical_url(&self) -> String {
        format!("www.reddit.com{}", self.permalink)
    }
}

/// One node in a submission's top-level comment forest
#[derive(Clone, Debug)]
pub enum CommentNode {
    /// A loaded comment with its text body
    Comment { body: String },

    /// Marker that more comments exist but were not loaded.
    /// These are skipped, never expanded.
    More,
}

/// Feed orderings supported by the remote service
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortMode {
    Hot,
    New,
    Top,
    Rising,
    Random,
}

impl SortMode {
    /// All accepted mode names, in the order callers see them
    pub const VALID_MODES: [&'static str; 5] = ["hot", "new", "top", "rising", "random"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::New => "new",
            Self::Top => "top",
            Self::Rising => "rising",
            Self::Random => "random",
        }
    }

    /// Listing path segment; `None` for modes without a bounded listing
    pub fn listing_segment(self) -> Option<&'static str> {
        match self {
            Self::Random => None,
            other => Some(other.as_str()),
        }
    }
}

impl FromStr for SortMode {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" => Ok(Self::Hot),
            "new" => Ok(Self::New),
            "top" => Ok(Self::Top),
            "rising" => Ok(Self::Rising),
            "random" => Ok(Self::Random),
            other => Err(FeedError::InvalidSortMode(other.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projection of a submission handed to the LLM
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionSummary {
    /// Title text
    pub title: String,

    /// Source subreddit name
    pub subreddit: String,

    /// Text-only flag
    #[serde(rename = "is-only-text")]
    pub is_only_text: bool,

    /// Canonical url
    pub url: String,

    /// Top-level comment bodies; empty unless comments were requested
    pub comments: Vec<String>,
}

impl SubmissionSummary {
    pub fn project(submission: &Submission, comments: Vec<String>) -> Self {
        Self {
            title: submission.title.clone(),
            subreddit: submission.subreddit.clone(),
            is_only_text: submission.is_self,
            url: submission.canonical_url(),
            comments,
        }
    }
}
