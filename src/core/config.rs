use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::SlackError;

pub const DEFAULT_BASE_URL: &str = "https://slack.com/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
    /// How many times a rate-limited request is re-sent before giving up.
    pub max_retries: u32,
}

impl ApiConfig {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ConfigError` if `SLACK_API_TOKEN` is unset or any
    /// optional variable holds an unparseable value.
    pub fn from_env() -> Result<Self, SlackError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ApiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SlackError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("SLACK_API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| SlackError::ConfigError("SLACK_API_TOKEN is not set".to_string()))?;

        let mut config = Self::new(token);

        if let Some(base_url) = lookup("SLACK_API_BASE_URL") {
            Url::parse(&base_url)?;
            config.base_url = base_url;
        }

        if let Some(secs) = lookup("SLACK_API_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|e| {
                SlackError::ConfigError(format!("SLACK_API_TIMEOUT_SECS: {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(retries) = lookup("SLACK_API_MAX_RETRIES") {
            config.max_retries = retries.parse::<u32>().map_err(|e| {
                SlackError::ConfigError(format!("SLACK_API_MAX_RETRIES: {e}"))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied_when_only_token_present() {
        let config = ApiConfig::from_lookup(lookup_from(&[("SLACK_API_TOKEN", "xoxb-1")])).unwrap();

        assert_eq!(config.token, "xoxb-1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let err = ApiConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, SlackError::ConfigError(msg) if msg.contains("SLACK_API_TOKEN")));

        let err = ApiConfig::from_lookup(lookup_from(&[("SLACK_API_TOKEN", "  ")])).unwrap_err();
        assert!(matches!(err, SlackError::ConfigError(_)));
    }

    #[test]
    fn test_overrides_are_read() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("SLACK_API_TOKEN", "xoxp-2"),
            ("SLACK_API_BASE_URL", "http://localhost:8080/api/"),
            ("SLACK_API_TIMEOUT_SECS", "5"),
            ("SLACK_API_MAX_RETRIES", "0"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/api/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ApiConfig::from_lookup(lookup_from(&[
            ("SLACK_API_TOKEN", "xoxb-1"),
            ("SLACK_API_BASE_URL", "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SlackError::ConfigError(_)));

        let err = ApiConfig::from_lookup(lookup_from(&[
            ("SLACK_API_TOKEN", "xoxb-1"),
            ("SLACK_API_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SlackError::ConfigError(msg) if msg.contains("TIMEOUT")));
    }
}
