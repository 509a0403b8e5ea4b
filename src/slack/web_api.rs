//! Slack Web API binding
//!
//! One method per Web API endpoint. Each method builds its parameter mapping,
//! hands it to the injected [`NetworkInterface`] together with the endpoint and
//! token, and maps the decoded body into a typed result. Transport errors are
//! returned unchanged; a missing or malformed response field yields `None`.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value, json};
use tracing::debug;

use super::endpoint::Endpoint;
use super::network::{HttpNetworkInterface, NetworkInterface, Response};
use super::parameters::{
    ChannelType, DEFAULT_HISTORY_COUNT, DEFAULT_HISTORY_OLDEST, DEFAULT_UPLOAD_FILETYPE,
    HistoryOptions, InfoType, ItemTarget, MessageOptions, ParseMode, Parameters, Presence,
    ReactionsListOptions, RtmStartOptions, UpdateOptions, UploadOptions, encode_attachments,
    filter_nil_parameters, join_ids,
};
use crate::core::config::ApiConfig;
use crate::errors::SlackError;
use crate::models::{
    Channel, Comment, DoNotDisturbStatus, File, History, User, parse_list, parse_object,
};
use crate::utils::formatting::{slack_format_escaping, slack_timestamp};

/// Where `chat.postMessage` put the message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostedMessage {
    pub ts: Option<String>,
    pub channel: Option<String>,
}

/// Client for the Slack Web API.
#[derive(Clone)]
pub struct SlackWebApi {
    network: Arc<dyn NetworkInterface>,
    token: String,
}

impl SlackWebApi {
    #[must_use]
    pub fn new(network: Arc<dyn NetworkInterface>, token: impl Into<String>) -> Self {
        Self {
            network,
            token: token.into(),
        }
    }

    /// Build a client that talks to Slack over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed from `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self, SlackError> {
        let network = HttpNetworkInterface::new(config)?;
        Ok(Self::new(Arc::new(network), config.token.clone()))
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    async fn call(&self, endpoint: Endpoint, parameters: Parameters) -> Result<Response, SlackError> {
        debug!(endpoint = %endpoint, fields = parameters.len(), "Dispatching Slack API request");
        self.network
            .request(endpoint, &self.token, parameters)
            .await
    }

    // ── RTM ──────────────────────────────────────────────────────────────────

    /// Start a real-time messaging session and return the raw `rtm.start` body.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn rtm_start(&self, options: RtmStartOptions) -> Result<Response, SlackError> {
        let parameters = filter_nil_parameters([
            ("simple_latest", options.simple_latest.map(Value::from)),
            ("no_unreads", options.no_unreads.map(Value::from)),
            ("mpim_aware", options.mpim_aware.map(Value::from)),
        ]);
        self.call(Endpoint::RtmStart, parameters).await
    }

    // ── Auth / API ───────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns the transport error if the token is rejected or the call fails.
    pub async fn authentication_test(&self) -> Result<bool, SlackError> {
        self.call(Endpoint::AuthTest, Parameters::new()).await?;
        Ok(true)
    }

    /// Call `api.test`, which echoes its arguments back under `args`.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn api_test(&self, arguments: Parameters) -> Result<Option<Map<String, Value>>, SlackError> {
        let response = self.call(Endpoint::ApiTest, arguments).await?;
        Ok(object_at(&response, "args"))
    }

    // ── Channels ─────────────────────────────────────────────────────────────

    pub async fn channel_history(
        &self,
        id: &str,
        options: HistoryOptions,
    ) -> Result<Option<History>, SlackError> {
        self.history(Endpoint::ChannelsHistory, id, options).await
    }

    pub async fn channel_info(&self, id: &str) -> Result<Option<Channel>, SlackError> {
        self.info(Endpoint::ChannelsInfo, ChannelType::Channel, id).await
    }

    pub async fn channels_list(
        &self,
        exclude_archived: bool,
    ) -> Result<Option<Vec<Channel>>, SlackError> {
        self.list(Endpoint::ChannelsList, ChannelType::Channel, exclude_archived)
            .await
    }

    /// Move the read cursor of a channel. Returns the timestamp that was marked.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn mark_channel(&self, channel: &str, timestamp: &str) -> Result<String, SlackError> {
        self.mark(Endpoint::ChannelsMark, channel, timestamp).await
    }

    pub async fn set_channel_purpose(&self, channel: &str, purpose: &str) -> Result<bool, SlackError> {
        self.set_info(Endpoint::ChannelsSetPurpose, InfoType::Purpose, channel, purpose)
            .await
    }

    pub async fn set_channel_topic(&self, channel: &str, topic: &str) -> Result<bool, SlackError> {
        self.set_info(Endpoint::ChannelsSetTopic, InfoType::Topic, channel, topic)
            .await
    }

    // ── Messaging ────────────────────────────────────────────────────────────

    pub async fn delete_message(&self, channel: &str, ts: &str) -> Result<bool, SlackError> {
        let parameters = filter_nil_parameters([
            ("channel", Some(Value::from(channel))),
            ("ts", Some(Value::from(ts))),
        ]);
        self.call(Endpoint::ChatDelete, parameters).await?;
        Ok(true)
    }

    /// Post a message. `text` is escaped for Slack markup before sending.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails or Slack rejects it.
    pub async fn send_message(
        &self,
        channel: &str,
        text: &str,
        options: MessageOptions,
    ) -> Result<PostedMessage, SlackError> {
        let parameters = filter_nil_parameters([
            ("channel", Some(Value::from(channel))),
            ("text", Some(Value::from(slack_format_escaping(text)))),
            ("as_user", options.as_user.map(Value::from)),
            ("parse", options.parse.map(|p| Value::from(p.as_str()))),
            ("link_names", options.link_names.map(Value::from)),
            ("unfurl_links", options.unfurl_links.map(Value::from)),
            ("unfurl_media", options.unfurl_media.map(Value::from)),
            ("username", options.username.map(Value::from)),
            (
                "attachments",
                encode_attachments(options.attachments.as_deref()).map(Value::from),
            ),
            ("icon_url", options.icon_url.map(Value::from)),
            ("icon_emoji", options.icon_emoji.map(Value::from)),
        ]);

        let response = self.call(Endpoint::ChatPostMessage, parameters).await?;
        Ok(PostedMessage {
            ts: string_at(&response, "ts"),
            channel: string_at(&response, "channel"),
        })
    }

    pub async fn update_message(
        &self,
        channel: &str,
        ts: &str,
        message: &str,
        options: UpdateOptions,
    ) -> Result<bool, SlackError> {
        let parse = options.parse.unwrap_or(ParseMode::None);
        let parameters = filter_nil_parameters([
            ("channel", Some(Value::from(channel))),
            ("ts", Some(Value::from(ts))),
            ("text", Some(Value::from(slack_format_escaping(message)))),
            ("parse", Some(Value::from(parse.as_str()))),
            ("link_names", Some(Value::from(options.link_names.unwrap_or(false)))),
            (
                "attachments",
                encode_attachments(options.attachments.as_deref()).map(Value::from),
            ),
        ]);
        self.call(Endpoint::ChatUpdate, parameters).await?;
        Ok(true)
    }

    // ── Do Not Disturb ───────────────────────────────────────────────────────

    /// DND status of `user`, or of the calling user when `None`.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn dnd_info(&self, user: Option<&str>) -> Result<Option<DoNotDisturbStatus>, SlackError> {
        let parameters = filter_nil_parameters([("user", user.map(Value::from))]);
        let response = self.call(Endpoint::DndInfo, parameters).await?;
        Ok(DoNotDisturbStatus::from_response(&response))
    }

    /// DND status keyed by user id, for `users` or the whole team when `None`.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn dnd_team_info(
        &self,
        users: Option<&[&str]>,
    ) -> Result<HashMap<String, DoNotDisturbStatus>, SlackError> {
        let parameters = filter_nil_parameters([("users", users.map(|u| Value::from(join_ids(u))))]);
        let response = self.call(Endpoint::DndTeamInfo, parameters).await?;
        Ok(enumerate_dnd_statuses(response.get("users")))
    }

    // ── Emoji ────────────────────────────────────────────────────────────────

    /// Custom emoji of the team, name to image URL (or `alias:<name>`).
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn emoji_list(&self) -> Result<Option<Map<String, Value>>, SlackError> {
        let response = self.call(Endpoint::EmojiList, Parameters::new()).await?;
        Ok(object_at(&response, "emoji"))
    }

    // ── Files ────────────────────────────────────────────────────────────────

    pub async fn delete_file(&self, file_id: &str) -> Result<bool, SlackError> {
        let parameters = filter_nil_parameters([("file", Some(Value::from(file_id)))]);
        self.call(Endpoint::FilesDelete, parameters).await?;
        Ok(true)
    }

    /// Upload `data` as a new file, optionally sharing it into `channels`.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn upload_file(
        &self,
        data: Vec<u8>,
        filename: &str,
        options: UploadOptions,
    ) -> Result<Option<File>, SlackError> {
        let filetype = options
            .filetype
            .unwrap_or_else(|| DEFAULT_UPLOAD_FILETYPE.to_string());
        let parameters = filter_nil_parameters([
            ("filename", Some(Value::from(filename))),
            ("filetype", Some(Value::from(filetype))),
            ("title", options.title.map(Value::from)),
            ("initial_comment", options.initial_comment.map(Value::from)),
            ("channels", options.channels.map(|c| Value::from(join_ids(&c)))),
        ]);

        debug!(endpoint = %Endpoint::FilesUpload, bytes = data.len(), "Dispatching Slack upload");
        let response = self
            .network
            .upload_request(&self.token, data, parameters)
            .await?;
        Ok(parse_object(response.get("file")))
    }

    // ── File comments ────────────────────────────────────────────────────────

    pub async fn add_file_comment(
        &self,
        file_id: &str,
        comment: &str,
    ) -> Result<Option<Comment>, SlackError> {
        let parameters = filter_nil_parameters([
            ("file", Some(Value::from(file_id))),
            ("comment", Some(Value::from(slack_format_escaping(comment)))),
        ]);
        let response = self.call(Endpoint::FilesCommentsAdd, parameters).await?;
        Ok(parse_object(response.get("comment")))
    }

    pub async fn edit_file_comment(
        &self,
        file_id: &str,
        comment_id: &str,
        comment: &str,
    ) -> Result<Option<Comment>, SlackError> {
        let parameters = filter_nil_parameters([
            ("file", Some(Value::from(file_id))),
            ("id", Some(Value::from(comment_id))),
            ("comment", Some(Value::from(slack_format_escaping(comment)))),
        ]);
        let response = self.call(Endpoint::FilesCommentsEdit, parameters).await?;
        Ok(parse_object(response.get("comment")))
    }

    pub async fn delete_file_comment(&self, file_id: &str, comment_id: &str) -> Result<bool, SlackError> {
        let parameters = filter_nil_parameters([
            ("file", Some(Value::from(file_id))),
            ("id", Some(Value::from(comment_id))),
        ]);
        self.call(Endpoint::FilesCommentsDelete, parameters).await?;
        Ok(true)
    }

    // ── Groups ───────────────────────────────────────────────────────────────

    pub async fn close_group(&self, group_id: &str) -> Result<bool, SlackError> {
        self.close(Endpoint::GroupsClose, group_id).await
    }

    pub async fn group_history(
        &self,
        id: &str,
        options: HistoryOptions,
    ) -> Result<Option<History>, SlackError> {
        self.history(Endpoint::GroupsHistory, id, options).await
    }

    pub async fn group_info(&self, id: &str) -> Result<Option<Channel>, SlackError> {
        self.info(Endpoint::GroupsInfo, ChannelType::Group, id).await
    }

    pub async fn groups_list(&self, exclude_archived: bool) -> Result<Option<Vec<Channel>>, SlackError> {
        self.list(Endpoint::GroupsList, ChannelType::Group, exclude_archived)
            .await
    }

    pub async fn mark_group(&self, channel: &str, timestamp: &str) -> Result<String, SlackError> {
        self.mark(Endpoint::GroupsMark, channel, timestamp).await
    }

    pub async fn open_group(&self, channel: &str) -> Result<bool, SlackError> {
        let parameters = filter_nil_parameters([("channel", Some(Value::from(channel)))]);
        self.call(Endpoint::GroupsOpen, parameters).await?;
        Ok(true)
    }

    pub async fn set_group_purpose(&self, channel: &str, purpose: &str) -> Result<bool, SlackError> {
        self.set_info(Endpoint::GroupsSetPurpose, InfoType::Purpose, channel, purpose)
            .await
    }

    pub async fn set_group_topic(&self, channel: &str, topic: &str) -> Result<bool, SlackError> {
        self.set_info(Endpoint::GroupsSetTopic, InfoType::Topic, channel, topic)
            .await
    }

    // ── IM ───────────────────────────────────────────────────────────────────

    pub async fn close_im(&self, channel: &str) -> Result<bool, SlackError> {
        self.close(Endpoint::ImClose, channel).await
    }

    pub async fn im_history(&self, id: &str, options: HistoryOptions) -> Result<Option<History>, SlackError> {
        self.history(Endpoint::ImHistory, id, options).await
    }

    pub async fn ims_list(&self, exclude_archived: bool) -> Result<Option<Vec<Channel>>, SlackError> {
        self.list(Endpoint::ImList, ChannelType::Im, exclude_archived)
            .await
    }

    pub async fn mark_im(&self, channel: &str, timestamp: &str) -> Result<String, SlackError> {
        self.mark(Endpoint::ImMark, channel, timestamp).await
    }

    /// Open a direct message with `user_id`. Returns the IM channel id.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn open_im(&self, user_id: &str) -> Result<Option<String>, SlackError> {
        let parameters = filter_nil_parameters([("user", Some(Value::from(user_id)))]);
        let response = self.call(Endpoint::ImOpen, parameters).await?;
        Ok(nested_id(&response, "channel"))
    }

    // ── MPIM ─────────────────────────────────────────────────────────────────

    pub async fn close_mpim(&self, channel: &str) -> Result<bool, SlackError> {
        self.close(Endpoint::MpimClose, channel).await
    }

    pub async fn mpim_history(
        &self,
        id: &str,
        options: HistoryOptions,
    ) -> Result<Option<History>, SlackError> {
        self.history(Endpoint::MpimHistory, id, options).await
    }

    /// MPIMs come back under `groups`, like private channels.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn mpims_list(&self, exclude_archived: bool) -> Result<Option<Vec<Channel>>, SlackError> {
        self.list(Endpoint::MpimList, ChannelType::Group, exclude_archived)
            .await
    }

    pub async fn mark_mpim(&self, channel: &str, timestamp: &str) -> Result<String, SlackError> {
        self.mark(Endpoint::MpimMark, channel, timestamp).await
    }

    /// Open a multiparty direct message with `user_ids`. Returns its id.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn open_mpim(&self, user_ids: &[&str]) -> Result<Option<String>, SlackError> {
        let parameters = filter_nil_parameters([("users", Some(Value::from(join_ids(user_ids))))]);
        let response = self.call(Endpoint::MpimOpen, parameters).await?;
        Ok(nested_id(&response, "group"))
    }

    // ── Pins ─────────────────────────────────────────────────────────────────

    /// Pin an item to `channel`. The target's own `channel` is not sent.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn pin_item(&self, channel: &str, item: &ItemTarget) -> Result<bool, SlackError> {
        self.pin(Endpoint::PinsAdd, channel, item).await
    }

    pub async fn unpin_item(&self, channel: &str, item: &ItemTarget) -> Result<bool, SlackError> {
        self.pin(Endpoint::PinsRemove, channel, item).await
    }

    // ── Reactions ────────────────────────────────────────────────────────────

    pub async fn add_reaction(&self, name: &str, item: &ItemTarget) -> Result<bool, SlackError> {
        self.react(Endpoint::ReactionsAdd, name, item).await
    }

    pub async fn remove_reaction(&self, name: &str, item: &ItemTarget) -> Result<bool, SlackError> {
        self.react(Endpoint::ReactionsRemove, name, item).await
    }

    /// Reactions on a single item. The body shape depends on the item type,
    /// so it is returned as is.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_reactions(&self, item: &ItemTarget, full: Option<bool>) -> Result<Response, SlackError> {
        let mut parameters = item_parameters(item, true);
        parameters.extend(filter_nil_parameters([("full", full.map(Value::from))]));
        self.call(Endpoint::ReactionsGet, parameters).await
    }

    /// Items a user has reacted to.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn list_reactions(
        &self,
        options: ReactionsListOptions,
    ) -> Result<Option<Vec<Value>>, SlackError> {
        let parameters = filter_nil_parameters([
            ("user", options.user.map(Value::from)),
            ("full", options.full.map(Value::from)),
            ("count", options.count.map(Value::from)),
            ("page", options.page.map(Value::from)),
        ]);
        let response = self.call(Endpoint::ReactionsList, parameters).await?;
        Ok(response.get("items").and_then(Value::as_array).cloned())
    }

    // ── Stars ────────────────────────────────────────────────────────────────

    pub async fn add_star(&self, item: &ItemTarget) -> Result<bool, SlackError> {
        self.star(Endpoint::StarsAdd, item).await
    }

    pub async fn remove_star(&self, item: &ItemTarget) -> Result<bool, SlackError> {
        self.star(Endpoint::StarsRemove, item).await
    }

    // ── Team ─────────────────────────────────────────────────────────────────

    pub async fn team_info(&self) -> Result<Option<Map<String, Value>>, SlackError> {
        let response = self.call(Endpoint::TeamInfo, Parameters::new()).await?;
        Ok(object_at(&response, "team"))
    }

    // ── Users ────────────────────────────────────────────────────────────────

    /// `active` or `away`.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn user_presence(&self, user: &str) -> Result<Option<String>, SlackError> {
        let parameters = filter_nil_parameters([("user", Some(Value::from(user)))]);
        let response = self.call(Endpoint::UsersGetPresence, parameters).await?;
        Ok(string_at(&response, "presence"))
    }

    pub async fn user_info(&self, id: &str) -> Result<Option<User>, SlackError> {
        let parameters = filter_nil_parameters([("user", Some(Value::from(id)))]);
        let response = self.call(Endpoint::UsersInfo, parameters).await?;
        Ok(parse_object(response.get("user")))
    }

    pub async fn users_list(&self, include_presence: bool) -> Result<Option<Vec<User>>, SlackError> {
        let parameters = filter_nil_parameters([("presence", Some(Value::from(include_presence)))]);
        let response = self.call(Endpoint::UsersList, parameters).await?;
        Ok(parse_list(response.get("members")))
    }

    pub async fn set_user_active(&self) -> Result<bool, SlackError> {
        self.call(Endpoint::UsersSetActive, Parameters::new()).await?;
        Ok(true)
    }

    pub async fn set_user_presence(&self, presence: Presence) -> Result<bool, SlackError> {
        let parameters = filter_nil_parameters([("presence", Some(Value::from(presence.as_str())))]);
        self.call(Endpoint::UsersSetPresence, parameters).await?;
        Ok(true)
    }

    // ── Shared request shapes ────────────────────────────────────────────────

    async fn close(&self, endpoint: Endpoint, channel_id: &str) -> Result<bool, SlackError> {
        let parameters = filter_nil_parameters([("channel", Some(Value::from(channel_id)))]);
        self.call(endpoint, parameters).await?;
        Ok(true)
    }

    async fn history(
        &self,
        endpoint: Endpoint,
        id: &str,
        options: HistoryOptions,
    ) -> Result<Option<History>, SlackError> {
        let latest = options.latest.unwrap_or_else(slack_timestamp);
        let oldest = options
            .oldest
            .unwrap_or_else(|| DEFAULT_HISTORY_OLDEST.to_string());
        let parameters = filter_nil_parameters([
            ("channel", Some(Value::from(id))),
            ("latest", Some(Value::from(latest))),
            ("oldest", Some(Value::from(oldest))),
            ("inclusive", Some(Value::from(options.inclusive.unwrap_or(false)))),
            ("count", Some(json!(options.count.unwrap_or(DEFAULT_HISTORY_COUNT)))),
            ("unreads", Some(Value::from(options.unreads.unwrap_or(false)))),
        ]);
        let response = self.call(endpoint, parameters).await?;
        Ok(History::from_response(&response))
    }

    async fn info(
        &self,
        endpoint: Endpoint,
        channel_type: ChannelType,
        id: &str,
    ) -> Result<Option<Channel>, SlackError> {
        let parameters = filter_nil_parameters([("channel", Some(Value::from(id)))]);
        let response = self.call(endpoint, parameters).await?;
        Ok(parse_object(response.get(channel_type.as_str())))
    }

    async fn list(
        &self,
        endpoint: Endpoint,
        channel_type: ChannelType,
        exclude_archived: bool,
    ) -> Result<Option<Vec<Channel>>, SlackError> {
        let parameters =
            filter_nil_parameters([("exclude_archived", Some(Value::from(exclude_archived)))]);
        let response = self.call(endpoint, parameters).await?;
        Ok(parse_list(response.get(&channel_type.list_key())))
    }

    async fn mark(&self, endpoint: Endpoint, channel: &str, timestamp: &str) -> Result<String, SlackError> {
        let parameters = filter_nil_parameters([
            ("channel", Some(Value::from(channel))),
            ("ts", Some(Value::from(timestamp))),
        ]);
        self.call(endpoint, parameters).await?;
        Ok(timestamp.to_string())
    }

    async fn set_info(
        &self,
        endpoint: Endpoint,
        info_type: InfoType,
        channel: &str,
        text: &str,
    ) -> Result<bool, SlackError> {
        let parameters = filter_nil_parameters([
            ("channel", Some(Value::from(channel))),
            (info_type.as_str(), Some(Value::from(text))),
        ]);
        self.call(endpoint, parameters).await?;
        Ok(true)
    }

    async fn pin(&self, endpoint: Endpoint, channel: &str, item: &ItemTarget) -> Result<bool, SlackError> {
        let mut parameters = item_parameters(item, false);
        parameters.insert("channel".to_string(), Value::from(channel));
        self.call(endpoint, parameters).await?;
        Ok(true)
    }

    async fn react(&self, endpoint: Endpoint, name: &str, item: &ItemTarget) -> Result<bool, SlackError> {
        let mut parameters = item_parameters(item, true);
        parameters.insert("name".to_string(), Value::from(name));
        self.call(endpoint, parameters).await?;
        Ok(true)
    }

    async fn star(&self, endpoint: Endpoint, item: &ItemTarget) -> Result<bool, SlackError> {
        self.call(endpoint, item_parameters(item, true)).await?;
        Ok(true)
    }
}

/// `file`, `file_comment`, `timestamp` and (optionally) `channel` of a target.
fn item_parameters(item: &ItemTarget, include_channel: bool) -> Parameters {
    let channel = if include_channel {
        item.channel.as_deref()
    } else {
        None
    };
    filter_nil_parameters([
        ("file", item.file.as_deref().map(Value::from)),
        ("file_comment", item.file_comment.as_deref().map(Value::from)),
        ("channel", channel.map(Value::from)),
        ("timestamp", item.timestamp.as_deref().map(Value::from)),
    ])
}

fn string_at(response: &Response, key: &str) -> Option<String> {
    response.get(key).and_then(Value::as_str).map(String::from)
}

fn object_at(response: &Response, key: &str) -> Option<Map<String, Value>> {
    response.get(key).and_then(Value::as_object).cloned()
}

fn nested_id(response: &Response, key: &str) -> Option<String> {
    response
        .get(key)
        .and_then(|v| v.get("id"))
        .and_then(Value::as_str)
        .map(String::from)
}

fn enumerate_dnd_statuses(statuses: Option<&Value>) -> HashMap<String, DoNotDisturbStatus> {
    statuses
        .and_then(Value::as_object)
        .map(|users| {
            users
                .iter()
                .filter_map(|(user, status)| {
                    parse_object::<DoNotDisturbStatus>(Some(status)).map(|s| (user.clone(), s))
                })
                .collect()
        })
        .unwrap_or_default()
}
