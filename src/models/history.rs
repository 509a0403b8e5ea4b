use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Message, lenient, lenient_list, parse_object};
use crate::slack::Response;

/// A page of messages from one of the `*.history` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    #[serde(deserialize_with = "lenient")]
    pub latest: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub messages: Vec<Message>,
    #[serde(deserialize_with = "lenient")]
    pub has_more: bool,
}

impl History {
    /// Build a history page from a complete `*.history` response body.
    #[must_use]
    pub fn from_response(response: &Response) -> Option<Self> {
        parse_object(Some(&Value::Object(response.clone())))
    }
}
