//! Drone domain models

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use crate::error::FleetError;
use crate::mission::Mission;

/// Capability contract shared by pooled drones, enhanced drones and lazy proxies.
///
/// Mission operations take `&self`: a drone is shared between the pool, the
/// caller and any wrappers, and all of them observe the same mission state.
pub trait FleetDrone: fmt::Debug {
    /// Drone identifier
    fn identifier(&self) -> &str;

    /// Human readable capability description
    fn capabilities(&self) -> String;

    /// Assign a mission, replacing any current one
    fn assign_mission(&self, mission: Mission);

    /// Drop the current mission
    fn clear_mission(&self);

    /// Current mission, if any
    fn active_mission(&self) -> Option<Mission>;
}

/// Closed set of drone kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DroneKind {
    /// Imaging and mapping
    Survey,
    /// Payload transport
    Cargo,
    /// Countermeasures and tracking
    Combat,
}

impl DroneKind {
    /// All kinds, in declaration order
    pub const ALL: [DroneKind; 3] = [DroneKind::Survey, DroneKind::Cargo, DroneKind::Combat];

    /// Lowercase kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            DroneKind::Survey => "survey",
            DroneKind::Cargo => "cargo",
            DroneKind::Combat => "combat",
        }
    }

    /// Base capability description for this kind
    pub fn capabilities(&self) -> &'static str {
        match self {
            DroneKind::Survey => "High-resolution imaging and terrain mapping",
            DroneKind::Cargo => "Medium payload transport",
            DroneKind::Combat => "Defensive countermeasures and target tracking",
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            DroneKind::Survey => "SurveyDrone",
            DroneKind::Cargo => "CargoDrone",
            DroneKind::Combat => "CombatDrone",
        }
    }
}

impl fmt::Display for DroneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DroneKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DroneKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FleetError::UnknownKind(s.to_string()))
    }
}

/// A concrete drone
#[derive(Debug)]
pub struct Drone {
    identifier: String,
    kind: DroneKind,
    mission: RefCell<Option<Mission>>,
}

impl Drone {
    /// Create an idle drone
    pub fn new(identifier: impl Into<String>, kind: DroneKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            mission: RefCell::new(None),
        }
    }

    /// Kind fixed at construction
    pub fn kind(&self) -> DroneKind {
        self.kind
    }

    /// True while a mission is assigned
    pub fn is_busy(&self) -> bool {
        self.mission.borrow().is_some()
    }
}

impl FleetDrone for Drone {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn capabilities(&self) -> String {
        self.kind.capabilities().to_string()
    }

    fn assign_mission(&self, mission: Mission) {
        self.mission.replace(Some(mission));
    }

    fn clear_mission(&self) {
        self.mission.replace(None);
    }

    fn active_mission(&self) -> Option<Mission> {
        self.mission.borrow().clone()
    }
}

impl fmt::Display for Drone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(id={}, mission=", self.kind.type_name(), self.identifier)?;
        match self.mission.borrow().as_ref() {
            Some(mission) => write!(f, "{mission})"),
            None => f.write_str("None)"),
        }
    }
}
