//! View models built from Slack Web API responses
//!
//! Every field is optional or defaulted and unknown fields are ignored. A field
//! that is null or has an unexpected shape falls back to its default without
//! affecting the rest of the object; array fields keep the elements that parse.

mod attachment;
mod channel;
mod dnd;
mod file;
mod history;
mod message;
mod user;

pub use attachment::*;
pub use channel::*;
pub use dnd::*;
pub use file::*;
pub use history::*;
pub use message::*;
pub use user::*;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Field deserializer: null or mistyped values become `T::default()`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&value).unwrap_or_default())
}

/// Array field deserializer: keeps the elements that parse, and yields an
/// empty list for null or non-array values.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_array()
        .map(|items| items.iter().filter_map(|item| T::deserialize(item).ok()).collect())
        .unwrap_or_default())
}

/// Parse a JSON object into `T`.
///
/// Returns `None` when the value is absent, is not an object, or does not
/// match the shape of `T`.
#[must_use]
pub fn parse_object<T: DeserializeOwned>(value: Option<&Value>) -> Option<T> {
    let value = value.filter(|v| v.is_object())?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(
                "Discarding unparseable {} payload: {}",
                std::any::type_name::<T>(),
                e
            );
            None
        }
    }
}

/// Parse a JSON array of objects into a `Vec<T>`, skipping entries that do not
/// parse. Returns `None` when the value is absent or not an array.
#[must_use]
pub fn parse_list<T: DeserializeOwned>(value: Option<&Value>) -> Option<Vec<T>> {
    let items = value?.as_array()?;
    Some(items.iter().filter_map(|item| parse_object(Some(item))).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object_rejects_non_objects() {
        assert!(parse_object::<User>(None).is_none());
        assert!(parse_object::<User>(Some(&json!("U123"))).is_none());
        assert!(parse_object::<User>(Some(&json!([{"id": "U1"}]))).is_none());
    }

    #[test]
    fn test_mistyped_field_falls_back_to_default() {
        let user = parse_object::<User>(Some(&json!({"id": "U1", "deleted": "nope"}))).unwrap();
        assert_eq!(user.id.as_deref(), Some("U1"));
        assert_eq!(user.deleted, None);
    }

    #[test]
    fn test_null_array_field_is_empty() {
        let value = json!([{"id": "C1", "members": null}, {"id": "C2"}]);
        let channels = parse_list::<Channel>(Some(&value)).unwrap();

        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].id.as_deref(), Some("C1"));
        assert!(channels[0].members.is_empty());
    }

    #[test]
    fn test_array_field_keeps_parseable_elements() {
        let value = json!({"id": "C1", "members": ["U1", 7, null, "U2"]});
        let channel = parse_object::<Channel>(Some(&value)).unwrap();
        assert_eq!(channel.members, vec!["U1".to_string(), "U2".to_string()]);
    }

    #[test]
    fn test_parse_list_skips_bad_entries() {
        let value = json!([{"id": "C1"}, 42, {"id": "C2", "name": "random"}]);
        let channels = parse_list::<Channel>(Some(&value)).unwrap();

        assert_eq!(channels.len(), 2);
        assert_eq!(channels[1].name.as_deref(), Some("random"));
    }

    #[test]
    fn test_parse_list_requires_array() {
        assert!(parse_list::<Channel>(Some(&json!({"id": "C1"}))).is_none());
        assert!(parse_list::<Channel>(None).is_none());
    }
}
