//! API request selectors and response envelope helpers.
//!
//! Responses stay raw `serde_json::Value`s; the field projector decides what
//! to keep. Only the few values the client and lookup layers branch on are
//! read here.

use std::fmt;

use serde_json::Value;

/// Which trending list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendingFeed {
    Videos,
    Hashtags,
    Music,
}

/// Which suggestion list to fetch for a seed user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    Users,
    Hashtags,
    Music,
}

impl SuggestionKind {
    /// Index of this kind's section in a discover response body.
    pub(crate) fn discover_section(self) -> usize {
        match self {
            SuggestionKind::Users => 0,
            SuggestionKind::Hashtags => 1,
            SuggestionKind::Music => 2,
        }
    }
}

impl fmt::Display for TrendingFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendingFeed::Videos => write!(f, "videos"),
            TrendingFeed::Hashtags => write!(f, "hashtags"),
            TrendingFeed::Music => write!(f, "music"),
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionKind::Users => write!(f, "users"),
            SuggestionKind::Hashtags => write!(f, "hashtags"),
            SuggestionKind::Music => write!(f, "music"),
        }
    }
}

/// A username resolved to the IDs the feed endpoints need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHandle {
    pub id: String,
    pub sec_uid: String,
    pub username: String,
}

impl UserHandle {
    /// Read the handle out of a user detail envelope.
    pub fn from_envelope(username: &str, envelope: &Value) -> Option<Self> {
        let user = envelope.pointer("/userInfo/user")?;
        Some(Self {
            id: text(user.get("id")?)?,
            sec_uid: user
                .get("secUid")
                .and_then(text)
                .unwrap_or_default(),
            username: username.to_string(),
        })
    }
}

/// `statusCode` of a detail envelope, if present.
pub fn status_code(envelope: &Value) -> Option<i64> {
    envelope.get("statusCode").and_then(Value::as_i64)
}

/// Whether a detail envelope reports success.
pub fn is_success(envelope: &Value) -> bool {
    status_code(envelope) == Some(0)
}

/// The `cardItem` objects of one section of a discover response.
pub fn discover_cards(body: &Value, section: usize) -> Vec<Value> {
    body.pointer(&format!("/body/{}/exploreList", section))
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|entry| entry.get("cardItem"))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_handle_from_envelope() {
        let envelope = json!({
            "statusCode": 0,
            "userInfo": { "user": { "id": "6745191554350760966", "secUid": "MS4wLjABAAAA", "uniqueId": "newt" } }
        });

        let handle = UserHandle::from_envelope("newt", &envelope).unwrap();
        assert_eq!(handle.id, "6745191554350760966");
        assert_eq!(handle.sec_uid, "MS4wLjABAAAA");
        assert_eq!(handle.username, "newt");
        assert!(is_success(&envelope));
    }

    #[test]
    fn test_user_handle_missing_id() {
        let envelope = json!({ "statusCode": 0, "userInfo": { "user": { "uniqueId": "newt" } } });
        assert!(UserHandle::from_envelope("newt", &envelope).is_none());
        assert!(UserHandle::from_envelope("newt", &json!({})).is_none());
    }

    #[test]
    fn test_status_code() {
        assert_eq!(status_code(&json!({ "statusCode": 10202 })), Some(10202));
        assert_eq!(status_code(&json!({})), None);
        assert!(!is_success(&json!({ "statusCode": 10202 })));
        assert!(!is_success(&json!({})));
    }

    #[test]
    fn test_discover_cards() {
        let body = json!({
            "body": [
                { "exploreList": [ { "cardItem": { "id": "u1", "subTitle": "@one" } } ] },
                { "exploreList": [ { "cardItem": { "id": "h1" } }, { "noCard": true }, { "cardItem": { "id": "h2" } } ] },
                { "exploreList": [] }
            ]
        });

        assert_eq!(discover_cards(&body, 0).len(), 1);
        let hashtags = discover_cards(&body, 1);
        assert_eq!(hashtags.len(), 2);
        assert_eq!(hashtags[1]["id"], "h2");
        assert!(discover_cards(&body, 2).is_empty());
        assert!(discover_cards(&body, 7).is_empty());
    }
}
