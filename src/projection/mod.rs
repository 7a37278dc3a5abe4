//! Field projection from raw platform records into flat records.

pub mod plan;
pub mod record;

use chrono::{DateTime, SecondsFormat};
use serde_json::Value;

pub use plan::{
    ExtractionPlan, FieldKind, FieldSpec, HASHTAG_INFO_PLAN, MUSIC_PLAN, TRENDING_HASHTAG_PLAN,
    USER_PLAN, VIDEO_PLAN,
};
pub use record::FlatRecord;

/// Project a raw record through an extraction plan.
///
/// Never fails: missing paths and values of the wrong shape become `null`.
pub fn project(raw: &Value, plan: ExtractionPlan) -> FlatRecord {
    let mut record = FlatRecord::with_capacity(plan.len());

    for field in plan {
        let value = field
            .paths
            .iter()
            .filter_map(|path| raw.pointer(path))
            .find(|v| !v.is_null())
            .map(|v| normalize(v, field.kind))
            .unwrap_or(Value::Null);

        record.insert(field.key, value);
    }

    record
}

/// Project every raw record of a list.
pub fn project_all<'a>(
    raws: impl IntoIterator<Item = &'a Value>,
    plan: ExtractionPlan,
) -> Vec<FlatRecord> {
    raws.into_iter().map(|raw| project(raw, plan)).collect()
}

fn normalize(value: &Value, kind: FieldKind) -> Value {
    match kind {
        FieldKind::Text => match value {
            Value::String(_) => value.clone(),
            Value::Number(n) => Value::String(n.to_string()),
            _ => Value::Null,
        },
        FieldKind::Count => match value {
            Value::Number(n) => n.as_u64().map(Value::from).unwrap_or(Value::Null),
            Value::String(s) => s.trim().parse::<u64>().map(Value::from).unwrap_or(Value::Null),
            _ => Value::Null,
        },
        FieldKind::Flag => match value {
            Value::Bool(_) => value.clone(),
            Value::String(s) => s.parse::<bool>().map(Value::Bool).unwrap_or(Value::Null),
            _ => Value::Null,
        },
        FieldKind::Timestamp => epoch_seconds(value)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true)))
            .unwrap_or(Value::Null),
    }
}

fn epoch_seconds(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
