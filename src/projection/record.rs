//! Flattened record representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single-level record produced by an extraction plan.
///
/// Keys keep plan order. Every key of the plan is present; values the raw
/// record did not provide are `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatRecord(Map<String, Value>);

impl FlatRecord {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Map::with_capacity(capacity))
    }

    pub(crate) fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    /// Get a field value. Missing keys and nulls both return `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Get a text field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Get a count field.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// Platform ID of the record.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// Direct media URL of a video record, if non-empty.
    pub fn play_addr(&self) -> Option<&str> {
        self.get_str("playAddr").filter(|s| !s.trim().is_empty())
    }

    /// Whether the record has a key, null or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
