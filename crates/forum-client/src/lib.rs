//! # forum-client
//!
//! HTTP client for the forum API:
//! - `POST /api/criar` creates a topic
//! - `GET /api/topico/{id}` fetches one topic
//!
//! Every call is a single attempt. There is no retry or backoff; callers
//! surface failures and let the user try again.

pub mod create;
pub mod topic;

mod error;
mod http;

pub use error::ClientError;

use std::time::Duration;

use forum_config::ApiConfig;

/// HTTP client bound to one forum deployment.
#[derive(Debug, Clone)]
pub struct ForumClient {
    http: reqwest::Client,
    base_url: String,
}

impl ForumClient {
    /// Build a client from the API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL all API paths are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "https://forum.example.com/".into(),
            ..ApiConfig::default()
        };
        let client = ForumClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://forum.example.com");
        assert_eq!(
            client.endpoint("/api/criar"),
            "https://forum.example.com/api/criar"
        );
    }
}
