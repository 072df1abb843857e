//! Kind-specific drone factories

use super::model::{Drone, DroneKind};

/// Factory Method for drone creation
pub trait DroneFactory {
    /// Kind produced by this factory
    fn kind(&self) -> DroneKind;

    /// Create an idle drone with the given identifier
    fn create(&self, identifier: &str) -> Drone {
        Drone::new(identifier, self.kind())
    }
}

/// Produces survey drones
#[derive(Debug, Clone, Copy, Default)]
pub struct SurveyDroneFactory;

/// Produces cargo drones
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoDroneFactory;

/// Produces combat drones
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatDroneFactory;

impl DroneFactory for SurveyDroneFactory {
    fn kind(&self) -> DroneKind {
        DroneKind::Survey
    }
}

impl DroneFactory for CargoDroneFactory {
    fn kind(&self) -> DroneKind {
        DroneKind::Cargo
    }
}

impl DroneFactory for CombatDroneFactory {
    fn kind(&self) -> DroneKind {
        DroneKind::Combat
    }
}

/// Factory for a given kind
pub fn factory_for(kind: DroneKind) -> Box<dyn DroneFactory> {
    match kind {
        DroneKind::Survey => Box::new(SurveyDroneFactory),
        DroneKind::Cargo => Box::new(CargoDroneFactory),
        DroneKind::Combat => Box::new(CombatDroneFactory),
    }
}
