use serde::{Deserialize, Serialize};

use super::{Attachment, Comment, File, lenient, lenient_list};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    #[serde(deserialize_with = "lenient")]
    pub ts: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub message_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub subtype: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub user: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub bot_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub channel: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thread_ts: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub reply_count: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub is_starred: Option<bool>,
    #[serde(deserialize_with = "lenient_list")]
    pub pinned_to: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub edited: Option<Edited>,
    #[serde(deserialize_with = "lenient_list")]
    pub attachments: Vec<Attachment>,
    #[serde(deserialize_with = "lenient_list")]
    pub reactions: Vec<Reaction>,
    #[serde(deserialize_with = "lenient")]
    pub file: Option<Box<File>>,
    #[serde(deserialize_with = "lenient")]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edited {
    #[serde(deserialize_with = "lenient")]
    pub user: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub ts: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub count: Option<i64>,
    #[serde(deserialize_with = "lenient_list")]
    pub users: Vec<String>,
}
