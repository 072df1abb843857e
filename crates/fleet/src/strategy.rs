//! Drone selection strategies
//!
//! A strategy picks one drone from the pool's available set for a mission.
//! Strategies are pure: they never touch the pool themselves.

use dronefleet_core::StrategyKind;
use std::fmt;
use std::rc::Rc;

use crate::drone::{Drone, DroneKind};
use crate::error::{FleetError, Result};
use crate::mission::Mission;

/// Missions at or above this priority prefer a combat drone
pub const HIGH_PRIORITY_THRESHOLD: i64 = 4;

/// Chooses a drone for a mission
pub trait SelectionStrategy: fmt::Debug {
    /// Strategy name for logs
    fn name(&self) -> &str;

    /// Select from `available`, ordered oldest first
    fn select<'a>(&self, available: &'a [Rc<Drone>], mission: &Mission) -> Result<&'a Rc<Drone>>;
}

/// Takes the most recently available drone
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSelection;

impl SelectionStrategy for SimpleSelection {
    fn name(&self) -> &str {
        "simple"
    }

    fn select<'a>(&self, available: &'a [Rc<Drone>], _mission: &Mission) -> Result<&'a Rc<Drone>> {
        available.last().ok_or(FleetError::NoDronesAvailable)
    }
}

/// Prefers drone kinds suited to the mission.
///
/// 1. priority >= 4: first available combat drone
/// 2. payload mentions a camera: first available survey drone
/// 3. otherwise the most recently available drone
#[derive(Debug, Clone, Copy, Default)]
pub struct PrioritySelection;

impl PrioritySelection {
    fn first_of_kind(available: &[Rc<Drone>], kind: DroneKind) -> Option<&Rc<Drone>> {
        available.iter().find(|d| d.kind() == kind)
    }
}

impl SelectionStrategy for PrioritySelection {
    fn name(&self) -> &str {
        "priority"
    }

    fn select<'a>(&self, available: &'a [Rc<Drone>], mission: &Mission) -> Result<&'a Rc<Drone>> {
        let fallback = available.last().ok_or(FleetError::NoDronesAvailable)?;

        if mission.priority() >= HIGH_PRIORITY_THRESHOLD {
            if let Some(drone) = Self::first_of_kind(available, DroneKind::Combat) {
                return Ok(drone);
            }
        }

        let wants_imaging = mission
            .payload()
            .is_some_and(|p| p.to_lowercase().contains("camera"));
        if wants_imaging {
            if let Some(drone) = Self::first_of_kind(available, DroneKind::Survey) {
                return Ok(drone);
            }
        }

        Ok(fallback)
    }
}

/// Instantiate a shipped strategy by kind
pub fn strategy_for(kind: StrategyKind) -> Box<dyn SelectionStrategy> {
    match kind {
        StrategyKind::Simple => Box::new(SimpleSelection),
        StrategyKind::Priority => Box::new(PrioritySelection),
    }
}
