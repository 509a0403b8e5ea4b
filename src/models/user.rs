use serde::{Deserialize, Serialize};

use super::lenient;

/// A member of the team, as returned by `users.info` and `users.list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub deleted: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub profile: Option<Profile>,
    #[serde(deserialize_with = "lenient")]
    pub is_admin: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_owner: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_primary_owner: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_restricted: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_ultra_restricted: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_bot: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub has_2fa: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub two_factor_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub has_files: Option<bool>,
    /// Only present when presence was requested (`users.list` with `presence=true`).
    #[serde(deserialize_with = "lenient")]
    pub presence: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tz: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tz_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tz_offset: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub real_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub skype: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub status_text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub status_emoji: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_24: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_32: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_48: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_72: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_192: Option<String>,
}

impl User {
    /// Best human-readable name: real name, then display name, then handle.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        let profile = self.profile.as_ref();
        profile
            .and_then(|p| p.real_name.as_deref())
            .filter(|n| !n.is_empty())
            .or_else(|| {
                profile
                    .and_then(|p| p.display_name.as_deref())
                    .filter(|n| !n.is_empty())
            })
            .or(self.name.as_deref())
    }
}
