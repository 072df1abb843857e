//! Fluent mission builder

use super::model::{Mission, DEFAULT_PRIORITY};
use crate::error::ValidationError;

/// Accumulates mission fields and validates them on [`build`](Self::build).
///
/// `build` consumes the builder, so each mission needs a fresh one.
#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until build() is called"]
pub struct MissionBuilder {
    name: Option<String>,
    waypoints: Vec<String>,
    duration: Option<i64>,
    priority: i64,
    payload: Option<String>,
}

impl MissionBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            name: None,
            waypoints: Vec::new(),
            duration: None,
            priority: DEFAULT_PRIORITY,
            payload: None,
        }
    }

    /// Set the mission name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a waypoint
    pub fn add_waypoint(mut self, waypoint: impl Into<String>) -> Self {
        self.waypoints.push(waypoint.into());
        self
    }

    /// Set the duration in minutes
    pub fn duration(mut self, minutes: i64) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Set the priority
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Set the payload label
    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Validate and produce the mission
    pub fn build(self) -> Result<Mission, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingName)?;
        let duration = self.duration.ok_or(ValidationError::MissingDuration)?;

        Mission::new(name, self.waypoints, duration, self.priority, self.payload)
    }
}

impl Default for MissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
