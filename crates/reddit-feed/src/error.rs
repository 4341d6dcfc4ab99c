//! Error Types for the Feed Adapter

use thiserror::Error;

/// Result type alias for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;

/// Feed adapter error types
#[derive(Error, Debug)]
pub enum FeedError {
    /// Neither a submission id nor a url was supplied
    #[error("exactly one of submission id or url is required")]
    InvalidArgument,

    /// Session construction against the remote service failed
    #[error("session unavailable: {0}")]
    SessionUnavailable(String),

    /// Subreddit does not exist (or is not visible)
    #[error("unknown subreddit: {0}")]
    InvalidSubreddit(String),

    /// Sort mode string matched none of the supported modes
    #[error("unknown sort mode: {0}")]
    InvalidSortMode(String),

    /// Subreddit disallows the random-submission feature
    #[error("random feed not supported by r/{0}")]
    RandomUnsupported(String),

    /// Configuration error (missing credentials, bad values)
    #[error("configuration error: {0}")]
    Config(String),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Remote service returned something unusable
    #[error("remote error: {0}")]
    Remote(String),
}

impl FeedError {
    /// Caller-visible message for this failure.
    ///
    /// These strings are kept byte-for-byte (spelling included) because
    /// existing callers match on them.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument => "Invalid argumnts.".into(),
            Self::SessionUnavailable(_) | Self::Config(_) => {
                "Cannot access the reddit client.".into()
            }
            Self::InvalidSubreddit(_) => "Invalid subreddit name.".into(),
            Self::InvalidSortMode(_) => {
                "Invalid option for fetching. Only valid options are hot, new, top, rising, random."
                    .into()
            }
            Self::RandomUnsupported(_) => "This subreddit does not support random feature.".into(),
            other => other.to_string(),
        }
    }
}
