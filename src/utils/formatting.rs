//! Text helpers for values sent to Slack

use chrono::{DateTime, Utc};

/// Escape the three characters Slack reserves for its own markup.
///
/// Slack treats `<`, `>` and `&` as control characters in message text, so any
/// literal occurrence has to be sent as an HTML entity.
///
/// # Examples
///
/// ```
/// use slackweb::utils::formatting::slack_format_escaping;
///
/// assert_eq!(slack_format_escaping("a < b & c"), "a &lt; b &amp; c");
/// ```
#[must_use]
pub fn slack_format_escaping(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Slack timestamp (`seconds.micros`) for the given instant.
#[must_use]
pub fn slack_timestamp_at(instant: DateTime<Utc>) -> String {
    format!(
        "{}.{:06}",
        instant.timestamp(),
        instant.timestamp_subsec_micros()
    )
}

/// Slack timestamp for the current time.
#[must_use]
pub fn slack_timestamp() -> String {
    slack_timestamp_at(Utc::now())
}
