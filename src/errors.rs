use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Failed to parse Slack response: {0}")]
    ParseError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Rate limited by Slack API (retry after {0:?})")]
    RateLimited(Duration),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl SlackError {
    /// The Slack error code (`invalid_auth`, `channel_not_found`, ...) when the
    /// API itself rejected the call.
    #[must_use]
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            SlackError::ApiError(code) => Some(code.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SlackError {
    fn from(error: serde_json::Error) -> Self {
        SlackError::ParseError(error.to_string())
    }
}

impl From<url::ParseError> for SlackError {
    fn from(error: url::ParseError) -> Self {
        SlackError::ConfigError(format!("invalid base URL: {error}"))
    }
}
