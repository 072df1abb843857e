//! DroneFleet coordination core
//!
//! This crate provides:
//! - Mission value objects, the fluent mission builder and the legacy record adapter
//! - Drones of a closed set of kinds with per-kind factories
//! - Capability enhancements and lazily constructed drone proxies
//! - A fixed-capacity drone pool with pluggable selection strategies
//! - Synchronous observer notification
//! - The [`FleetManager`] facade composing all of the above

#![warn(missing_docs)]

pub mod drone;
pub mod error;
pub mod manager;
pub mod mission;
pub mod observer;
pub mod pool;
pub mod strategy;

// Re-export key types for convenience
pub use drone::{
    Drone, DroneKind, EnhanceOptions, EnhancedDrone, Enhancement, FleetDrone, LazyDrone,
};
pub use error::{FleetError, ObserverError, Result, ValidationError};
pub use manager::FleetManager;
pub use mission::{LegacyMissionAdapter, Mission, MissionBuilder};
pub use observer::{EventLog, FleetObserver, MissionCountObserver, ObserverId, ObserverRegistry};
pub use pool::{DronePool, PoolStats};
pub use strategy::{PrioritySelection, SelectionStrategy, SimpleSelection};
