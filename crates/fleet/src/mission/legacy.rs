//! Legacy mission record adapter
//!
//! Older tooling describes missions as loosely-typed JSON objects:
//!
//! | key     | meaning            | default     |
//! |---------|--------------------|-------------|
//! | `title` | mission name       | `"Unnamed"` |
//! | `wps`   | waypoint labels    | empty       |
//! | `len`   | duration (minutes) | `0`         |
//! | `prio`  | priority           | `3`         |
//! | `cargo` | payload label      | unset       |
//!
//! Records go through [`MissionBuilder`], so a record without `len` or `wps`
//! fails the same validation a hand-built mission would.

use serde_json::{Map, Value};

use super::builder::MissionBuilder;
use super::model::{Mission, DEFAULT_PRIORITY};
use crate::error::ValidationError;

const DEFAULT_TITLE: &str = "Unnamed";

/// Converts a legacy record into a [`Mission`].
#[derive(Debug, Clone)]
pub struct LegacyMissionAdapter<'a> {
    record: &'a Value,
}

impl<'a> LegacyMissionAdapter<'a> {
    /// Wrap a legacy record
    pub fn new(record: &'a Value) -> Self {
        Self { record }
    }

    /// Translate the record through the mission builder
    pub fn to_mission(&self) -> Result<Mission, ValidationError> {
        let fields = self
            .record
            .as_object()
            .ok_or_else(|| invalid("record", self.record))?;

        let mut builder = MissionBuilder::new();

        match fields.get("title") {
            None => builder = builder.name(DEFAULT_TITLE),
            Some(Value::Null) => {}
            Some(title) => builder = builder.name(text(title)),
        }

        for waypoint in waypoints(fields)? {
            builder = builder.add_waypoint(text(waypoint));
        }

        builder = builder
            .duration(integer(fields, "len", 0)?)
            .priority(integer(fields, "prio", DEFAULT_PRIORITY)?);

        if let Some(cargo) = fields.get("cargo").filter(|v| is_truthy(v)) {
            builder = builder.payload(text(cargo));
        }

        builder.build()
    }
}

fn waypoints(fields: &Map<String, Value>) -> Result<&[Value], ValidationError> {
    match fields.get("wps") {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(invalid("wps", other)),
    }
}

/// Integer coercion: integers, truncated floats, booleans and numeric strings.
fn integer(fields: &Map<String, Value>, key: &str, default: i64) -> Result<i64, ValidationError> {
    let Some(value) = fields.get(key) else {
        return Ok(default);
    };

    let coerced = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    coerced.ok_or_else(|| invalid(key, value))
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn invalid(field: &str, value: &Value) -> ValidationError {
    ValidationError::InvalidField {
        field: field.to_string(),
        value: value.to_string(),
    }
}
