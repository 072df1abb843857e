//! Drone domain models
//!
//! Concrete drones of a closed set of kinds, their factories, and the
//! two wrappers that share the [`FleetDrone`] contract: capability
//! enhancements and the lazy construction proxy.

pub mod enhance;
pub mod factory;
pub mod model;
pub mod proxy;

pub use enhance::{EnhanceOptions, EnhancedDrone, Enhancement};
pub use factory::{
    factory_for, CargoDroneFactory, CombatDroneFactory, DroneFactory, SurveyDroneFactory,
};
pub use model::{Drone, DroneKind, FleetDrone};
pub use proxy::LazyDrone;
