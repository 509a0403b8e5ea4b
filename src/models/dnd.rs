use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient, parse_object};
use crate::slack::Response;

/// Do Not Disturb state of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoNotDisturbStatus {
    #[serde(deserialize_with = "lenient")]
    pub dnd_enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub next_dnd_start_ts: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub next_dnd_end_ts: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub snooze_enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub snooze_endtime: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub snooze_remaining: Option<i64>,
}

impl DoNotDisturbStatus {
    #[must_use]
    pub fn from_response(response: &Response) -> Option<Self> {
        parse_object(Some(&Value::Object(response.clone())))
    }

    #[must_use]
    pub fn is_snoozing(&self) -> bool {
        self.snooze_enabled.unwrap_or(false)
    }
}
