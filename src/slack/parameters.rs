//! Request parameter construction
//!
//! Each endpoint builds a list of `(name, Option<value>)` pairs; absent values
//! are dropped before the mapping reaches the transport.

use serde_json::{Map, Value};
use tracing::warn;

use crate::models::Attachment;

/// Key/value fields sent to an endpoint.
pub type Parameters = Map<String, Value>;

/// How Slack should treat the text of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Full,
    None,
}

impl ParseMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMode::Full => "full",
            ParseMode::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Auto,
    Away,
}

impl Presence {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Presence::Auto => "auto",
            Presence::Away => "away",
        }
    }
}

/// Which descriptive field of a channel or group is being set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoType {
    Purpose,
    Topic,
}

impl InfoType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InfoType::Purpose => "purpose",
            InfoType::Topic => "topic",
        }
    }
}

/// Response key under which info/list endpoints return their conversations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChannelType {
    Channel,
    Group,
    Im,
}

impl ChannelType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ChannelType::Channel => "channel",
            ChannelType::Group => "group",
            ChannelType::Im => "im",
        }
    }

    /// Key of the list returned by the matching `*.list` endpoint.
    pub(crate) fn list_key(self) -> String {
        format!("{}s", self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RtmStartOptions {
    pub simple_latest: Option<bool>,
    pub no_unreads: Option<bool>,
    pub mpim_aware: Option<bool>,
}

/// Window of a `*.history` request. Unset fields fall back to Slack's usual
/// defaults: everything up to now, inclusive of nothing, 100 messages.
#[derive(Debug, Clone, Default)]
pub struct HistoryOptions {
    pub latest: Option<String>,
    pub oldest: Option<String>,
    pub inclusive: Option<bool>,
    pub count: Option<u32>,
    pub unreads: Option<bool>,
}

pub const DEFAULT_HISTORY_OLDEST: &str = "0";
pub const DEFAULT_HISTORY_COUNT: u32 = 100;

/// Optional fields of `chat.postMessage`.
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub username: Option<String>,
    pub as_user: Option<bool>,
    pub parse: Option<ParseMode>,
    pub link_names: Option<bool>,
    pub attachments: Option<Vec<Option<Attachment>>>,
    pub unfurl_links: Option<bool>,
    pub unfurl_media: Option<bool>,
    pub icon_url: Option<String>,
    pub icon_emoji: Option<String>,
}

impl MessageOptions {
    #[must_use]
    pub fn as_user() -> Self {
        Self {
            as_user: Some(true),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments.into_iter().map(Some).collect());
        self
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }
}

/// Optional fields of `chat.update`. `parse` and `link_names` are always sent
/// and default to `none` and `false`.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub attachments: Option<Vec<Option<Attachment>>>,
    pub parse: Option<ParseMode>,
    pub link_names: Option<bool>,
}

/// Optional fields of `files.upload`.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Defaults to `auto`, letting Slack detect the type.
    pub filetype: Option<String>,
    pub title: Option<String>,
    pub initial_comment: Option<String>,
    pub channels: Option<Vec<String>>,
}

pub const DEFAULT_UPLOAD_FILETYPE: &str = "auto";

/// The item a pin, reaction or star applies to.
///
/// Slack requires one of `file`, `file_comment`, or `channel` (plus
/// `timestamp` for a message); the combination is checked server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTarget {
    pub file: Option<String>,
    pub file_comment: Option<String>,
    pub channel: Option<String>,
    pub timestamp: Option<String>,
}

impl ItemTarget {
    #[must_use]
    pub fn file(file_id: impl Into<String>) -> Self {
        Self {
            file: Some(file_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn file_comment(comment_id: impl Into<String>) -> Self {
        Self {
            file_comment: Some(comment_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn channel(channel_id: impl Into<String>) -> Self {
        Self {
            channel: Some(channel_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn message(channel_id: impl Into<String>, ts: impl Into<String>) -> Self {
        Self {
            channel: Some(channel_id.into()),
            timestamp: Some(ts.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReactionsListOptions {
    pub user: Option<String>,
    pub full: Option<bool>,
    pub count: Option<u32>,
    pub page: Option<u32>,
}

/// Build a parameter mapping, keeping only the entries that carry a value.
#[must_use]
pub fn filter_nil_parameters<'a, I>(parameters: I) -> Parameters
where
    I: IntoIterator<Item = (&'a str, Option<Value>)>,
{
    parameters
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
}

/// Serialize attachments to the JSON array string Slack expects in a single
/// form field. `None` entries are skipped; `None` input yields `None`.
#[must_use]
pub fn encode_attachments(attachments: Option<&[Option<Attachment>]>) -> Option<String> {
    let values: Vec<Value> = attachments?
        .iter()
        .flatten()
        .map(Attachment::to_value)
        .collect();

    match serde_json::to_string(&values) {
        Ok(encoded) => Some(encoded),
        Err(e) => {
            warn!("Dropping attachments that failed to encode: {}", e);
            None
        }
    }
}

/// Join ids into the comma separated list several endpoints take.
#[must_use]
pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}
