//! Reddit Credentials Configuration
//!
//! All five values are required for session construction; there are no
//! defaults for credentials.

use crate::error::{FeedError, Result};

pub const ENV_USERNAME: &str = "REDDIT_USERNAME";
pub const ENV_PASSWORD: &str = "REDDIT_PASSWORD";
pub const ENV_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
pub const ENV_USER_AGENT: &str = "REDDIT_USER_AGENT";

/// Credentials for the password-grant session
#[derive(Clone, Debug)]
pub struct RedditConfig {
    /// Account username
    pub username: String,

    /// Account password
    pub password: String,

    /// OAuth client identifier (script app)
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// User-agent string sent with every request
    pub user_agent: String,
}

impl RedditConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &'static str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    FeedError::Config(format!("missing required environment variable: {key}"))
                })
        };

        Ok(Self {
            username: get(ENV_USERNAME)?,
            password: get(ENV_PASSWORD)?,
            client_id: get(ENV_CLIENT_ID)?,
            client_secret: get(ENV_CLIENT_SECRET)?,
            user_agent: get(ENV_USER_AGENT)?,
        })
    }
}
