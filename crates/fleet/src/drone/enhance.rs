//! Runtime capability enhancements
//!
//! An [`EnhancedDrone`] shares its inner drone, so identity and mission
//! state stay those of the wrapped drone; only the capability description
//! grows, one suffix per enhancement in the order applied.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

use super::model::FleetDrone;
use crate::mission::Mission;

/// Capability enhancement layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enhancement {
    /// Low-visibility stealth package
    Stealth,
    /// Auxiliary battery for extended range
    RangeExtender,
}

impl Enhancement {
    /// Name used in event payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Enhancement::Stealth => "stealth",
            Enhancement::RangeExtender => "range_extender",
        }
    }

    /// Text appended to the capability description
    pub fn suffix(&self) -> &'static str {
        match self {
            Enhancement::Stealth => " + low-visibility stealth",
            Enhancement::RangeExtender => " + extended flight range",
        }
    }
}

/// Which enhancements to apply; each flag toggles one layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnhanceOptions {
    /// Apply [`Enhancement::Stealth`]
    pub stealth: bool,
    /// Apply [`Enhancement::RangeExtender`]
    pub range_extender: bool,
}

impl EnhanceOptions {
    /// Enhancements selected, in application order
    pub fn enhancements(&self) -> Vec<Enhancement> {
        let mut selected = Vec::with_capacity(2);
        if self.stealth {
            selected.push(Enhancement::Stealth);
        }
        if self.range_extender {
            selected.push(Enhancement::RangeExtender);
        }
        selected
    }
}

/// A drone with capability enhancements layered on top
#[derive(Debug, Clone)]
pub struct EnhancedDrone {
    inner: Rc<dyn FleetDrone>,
    layers: Vec<Enhancement>,
}

impl EnhancedDrone {
    /// Wrap a drone with no enhancements yet
    pub fn new(inner: Rc<dyn FleetDrone>) -> Self {
        Self {
            inner,
            layers: Vec::new(),
        }
    }

    /// Add one more layer on top of the existing ones
    pub fn with(mut self, enhancement: Enhancement) -> Self {
        self.layers.push(enhancement);
        self
    }

    /// Applied layers, innermost first
    pub fn layers(&self) -> &[Enhancement] {
        &self.layers
    }

    /// The wrapped drone
    pub fn inner(&self) -> &Rc<dyn FleetDrone> {
        &self.inner
    }
}

impl FleetDrone for EnhancedDrone {
    fn identifier(&self) -> &str {
        self.inner.identifier()
    }

    fn capabilities(&self) -> String {
        self.layers
            .iter()
            .fold(self.inner.capabilities(), |mut caps, layer| {
                caps.push_str(layer.suffix());
                caps
            })
    }

    fn assign_mission(&self, mission: Mission) {
        self.inner.assign_mission(mission);
    }

    fn clear_mission(&self) {
        self.inner.clear_mission();
    }

    fn active_mission(&self) -> Option<Mission> {
        self.inner.active_mission()
    }
}
