use serde::{Deserialize, Serialize};

use super::{Message, lenient, lenient_list};

/// A public channel, private group, direct message or multiparty direct
/// message. The `is_*` flags tell them apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub creator: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_archived: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_general: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_channel: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_group: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_im: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_mpim: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_member: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_open: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_user_deleted: Option<bool>,
    /// The other party of a direct message.
    #[serde(deserialize_with = "lenient")]
    pub user: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub members: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub topic: Option<Topic>,
    #[serde(deserialize_with = "lenient")]
    pub purpose: Option<Topic>,
    #[serde(deserialize_with = "lenient")]
    pub last_read: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub latest: Option<Message>,
    #[serde(deserialize_with = "lenient")]
    pub unread_count: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub unread_count_display: Option<i64>,
}

/// Topic or purpose of a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    #[serde(deserialize_with = "lenient")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub creator: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_set: Option<i64>,
}
