use std::error::Error;
use std::time::Duration;

use slackweb::errors::SlackError;

#[test]
fn test_slack_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = SlackError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_slack_error_display() {
    let error = SlackError::ApiError("invalid_auth".to_string());
    assert_eq!(format!("{error}"), "Failed to access Slack API: invalid_auth");

    let error = SlackError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = SlackError::RateLimited(Duration::from_secs(30));
    assert_eq!(
        format!("{error}"),
        "Rate limited by Slack API (retry after 30s)"
    );

    let error = SlackError::ConfigError("SLACK_API_TOKEN is not set".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: SLACK_API_TOKEN is not set"
    );
}

#[test]
fn test_api_error_code_only_for_api_errors() {
    assert_eq!(
        SlackError::ApiError("channel_not_found".into()).api_error_code(),
        Some("channel_not_found")
    );
    assert_eq!(SlackError::HttpError("boom".into()).api_error_code(), None);
    assert_eq!(
        SlackError::RateLimited(Duration::from_secs(1)).api_error_code(),
        None
    );
}

#[test]
fn test_slack_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let slack_err: SlackError = err.into();
    assert!(matches!(slack_err, SlackError::ParseError(_)));

    let err = url::Url::parse("not a url").unwrap_err();
    let slack_err: SlackError = err.into();
    match slack_err {
        SlackError::ConfigError(msg) => assert!(msg.starts_with("invalid base URL")),
        other => panic!("Unexpected error type: {other:?}"),
    }

    // Compile-time check that reqwest errors convert.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SlackError {
        SlackError::from(err)
    }
}

#[test]
fn test_every_variant_has_a_message() {
    let errors = [
        SlackError::ParseError("bad body".into()),
        SlackError::ApiError("invalid_auth".into()),
        SlackError::HttpError("timeout".into()),
        SlackError::RateLimited(Duration::from_secs(2)),
        SlackError::ConfigError("missing token".into()),
    ];

    for error in &errors {
        // Exhaustive so a new variant has to be added here.
        let detail = match error {
            SlackError::ParseError(m)
            | SlackError::ApiError(m)
            | SlackError::HttpError(m)
            | SlackError::ConfigError(m) => m.clone(),
            SlackError::RateLimited(d) => format!("{d:?}"),
        };
        assert!(error.to_string().contains(&detail), "{error}");
    }
}
