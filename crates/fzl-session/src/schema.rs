//! Stored session schema recognition and migration
//!
//! Known shapes, oldest first:
//! - flat split list: `[{id, media?}]`
//! - bare tab array: `[{id, name, splits: [{id, media?}]}]`
//! - last-activity record: `{tabs | splits, activeTab?, isDark?, timestamp}`
//! - versioned envelope: `{version: 2, tabs, timestamp}`
//!
//! Every shape migrates to a list of [`SnapshotTab`]. Data that matches
//! none of them, or matches one only partially, is rejected as a whole.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::SessionError;
use crate::snapshot::{Snapshot, SnapshotSplit, SnapshotTab, SNAPSHOT_VERSION};
use crate::Result;

const MIGRATED_TAB_NAME: &str = "Tab 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    FlatSplits,
    Tabs,
    LastActivity,
    Current,
}

#[derive(Debug, Clone)]
pub struct Decoded {
    pub tabs: Vec<SnapshotTab>,
    pub active_tab: usize,
    pub created_at: Option<DateTime<Utc>>,
    pub schema: SchemaVersion,
}

pub fn decode(raw: &str) -> Result<Decoded> {
    let value: Value = serde_json::from_str(raw)?;
    decode_value(value)
}

pub fn decode_value(value: Value) -> Result<Decoded> {
    match value {
        Value::Array(items) => decode_array(items),
        Value::Object(map) if map.contains_key("version") => decode_envelope(map),
        Value::Object(map) => decode_last_activity(map),
        other => Err(SessionError::UnrecognizedSchema(format!(
            "expected array or object, found {}",
            json_type(&other)
        ))),
    }
}

/// Accepts RFC 3339 strings and millisecond epoch numbers
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

fn decode_array(items: Vec<Value>) -> Result<Decoded> {
    let is_flat = !items.is_empty() && items.iter().all(|item| item.get("splits").is_none());

    if is_flat {
        let splits: Vec<SnapshotSplit> = serde_json::from_value(Value::Array(items))?;
        return Ok(Decoded {
            tabs: vec![wrap_flat_splits(splits)],
            active_tab: 0,
            created_at: None,
            schema: SchemaVersion::FlatSplits,
        });
    }

    let tabs: Vec<SnapshotTab> = serde_json::from_value(Value::Array(items))?;
    Ok(Decoded {
        tabs,
        active_tab: 0,
        created_at: None,
        schema: SchemaVersion::Tabs,
    })
}

fn decode_envelope(map: Map<String, Value>) -> Result<Decoded> {
    let version = map
        .get("version")
        .and_then(Value::as_u64)
        .ok_or_else(|| SessionError::UnrecognizedSchema("non-numeric version".to_string()))?;

    if version != SNAPSHOT_VERSION {
        return Err(SessionError::UnsupportedVersion(version));
    }

    let snapshot: Snapshot = serde_json::from_value(Value::Object(map))?;
    Ok(Decoded {
        tabs: snapshot.tabs,
        active_tab: 0,
        created_at: Some(snapshot.timestamp),
        schema: SchemaVersion::Current,
    })
}

fn decode_last_activity(mut map: Map<String, Value>) -> Result<Decoded> {
    if !map.contains_key("timestamp") {
        return Err(SessionError::UnrecognizedSchema(
            "object without version or timestamp".to_string(),
        ));
    }

    let tabs = if let Some(tabs) = map.remove("tabs") {
        serde_json::from_value::<Vec<SnapshotTab>>(tabs)?
    } else if let Some(splits) = map.remove("splits") {
        let splits: Vec<SnapshotSplit> = serde_json::from_value(splits)?;
        vec![wrap_flat_splits(splits)]
    } else {
        return Err(SessionError::UnrecognizedSchema(
            "activity record without tabs or splits".to_string(),
        ));
    };

    let active_tab = map
        .get("activeTab")
        .and_then(Value::as_u64)
        .map(|index| index as usize)
        .unwrap_or(0);

    Ok(Decoded {
        tabs,
        active_tab,
        created_at: None,
        schema: SchemaVersion::LastActivity,
    })
}

fn wrap_flat_splits(splits: Vec<SnapshotSplit>) -> SnapshotTab {
    SnapshotTab {
        id: Uuid::new_v4().to_string(),
        name: MIGRATED_TAB_NAME.to_string(),
        splits,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
