use serde::{Deserialize, Serialize};

use super::{Reaction, lenient, lenient_list};

/// A file shared in the team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub timestamp: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub mimetype: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub filetype: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub pretty_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub user: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub mode: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub editable: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_external: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub external_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_public: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub url_private: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url_private_download: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumb_64: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumb_80: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumb_360: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumb_480: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumb_720: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub permalink: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub permalink_public: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub preview: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub lines: Option<i64>,
    #[serde(deserialize_with = "lenient_list")]
    pub channels: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub groups: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub ims: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub initial_comment: Option<Comment>,
    #[serde(deserialize_with = "lenient")]
    pub comments_count: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub num_stars: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub is_starred: Option<bool>,
    #[serde(deserialize_with = "lenient_list")]
    pub pinned_to: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub reactions: Vec<Reaction>,
}

/// A comment attached to a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub timestamp: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub user: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub comment: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_starred: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub num_stars: Option<i64>,
    #[serde(deserialize_with = "lenient_list")]
    pub pinned_to: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub reactions: Vec<Reaction>,
}
