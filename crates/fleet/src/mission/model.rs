//! Mission value object

use serde::Serialize;
use std::fmt;

use crate::error::ValidationError;

/// Priority assigned when none is given
pub const DEFAULT_PRIORITY: i64 = 3;

/// Immutable mission parameters.
///
/// Only [`MissionBuilder::build`](super::MissionBuilder::build) and the legacy
/// adapter produce missions, so every instance has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mission {
    name: String,
    waypoints: Vec<String>,
    duration_minutes: i64,
    priority: i64,
    payload: Option<String>,
}

impl Mission {
    pub(crate) fn new(
        name: String,
        waypoints: Vec<String>,
        duration_minutes: i64,
        priority: i64,
        payload: Option<String>,
    ) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if duration_minutes <= 0 {
            return Err(ValidationError::NonPositiveDuration(duration_minutes));
        }
        if waypoints.is_empty() {
            return Err(ValidationError::NoWaypoints);
        }

        Ok(Self {
            name,
            waypoints,
            duration_minutes,
            priority,
            payload,
        })
    }

    /// Mission name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered waypoint labels
    pub fn waypoints(&self) -> &[String] {
        &self.waypoints
    }

    /// Planned duration in minutes, always positive
    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    /// Mission priority
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Payload label, if any
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// JSON form used in event payloads
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "waypoints": self.waypoints,
            "duration_minutes": self.duration_minutes,
            "priority": self.priority,
            "payload": self.payload,
        })
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mission(name={:?}, waypoints={:?}, duration_minutes={}, priority={}, payload={:?})",
            self.name, self.waypoints, self.duration_minutes, self.priority, self.payload
        )
    }
}
