//! Event record delivered to fleet observers.
//!
//! Every significant coordinator action produces one [`Event`]: a dotted
//! event type (see [`event_types`]), the emitting component, and a
//! key-value payload describing the action.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key-value payload attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(flatten)]
    data: BTreeMap<String, serde_json::Value>,
}

impl EventPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key-value pair.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Get a string value by key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the payload carries no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for EventPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

/// A single coordinator event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier
    pub event_id: String,
    /// Timestamp (Unix epoch milliseconds)
    pub timestamp: u64,
    /// Event type, e.g. `mission.assigned`
    pub event_type: String,
    /// Component that emitted the event
    pub source: String,
    /// Structured description of the action
    pub payload: EventPayload,
}

/// Builder for creating events.
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// Create a new event builder.
    pub fn new(event_type: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            event: Event {
                event_id: uuid::Uuid::new_v4().to_string(),
                timestamp: current_timestamp(),
                event_type: event_type.into(),
                source: source.into(),
                payload: EventPayload::new(),
            },
        }
    }

    /// Add a payload entry.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.event.payload.insert(key, value);
        self
    }

    /// Build the event.
    pub fn build(self) -> Event {
        self.event
    }
}

/// Standard event types emitted by the fleet coordinator.
pub mod event_types {
    pub const POOL_PRELOADED: &str = "pool.preloaded";
    pub const MISSION_ASSIGNED: &str = "mission.assigned";
    pub const MISSION_ADAPTED: &str = "mission.adapted";
    pub const DRONE_RELEASED: &str = "drone.released";
    pub const DRONE_DECORATED: &str = "drone.decorated";
    pub const PROXY_CREATED: &str = "proxy.created";
}

/// Get current timestamp in milliseconds.
fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
