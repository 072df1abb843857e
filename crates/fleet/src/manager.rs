//! Fleet manager facade
//!
//! Composes the drone pool, the active selection strategy and the observer
//! registry behind a small API. Every state-changing call emits an event to
//! the registered observers.
//!
//! One coordinator per process is obtained with [`FleetManager::claim`];
//! the entry point holds it and passes it by reference. [`FleetManager::new`]
//! builds an unguarded instance for embedding and tests.

use dronefleet_core::{event_types, EventBuilder, FleetConfig};
use serde_json::Value;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use crate::drone::{
    factory_for, CargoDroneFactory, CombatDroneFactory, Drone, DroneFactory, DroneKind,
    EnhanceOptions, EnhancedDrone, FleetDrone, LazyDrone, SurveyDroneFactory,
};
use crate::error::{FleetError, Result};
use crate::mission::{LegacyMissionAdapter, Mission, MissionBuilder};
use crate::observer::{FleetObserver, ObserverId, ObserverRegistry};
use crate::pool::{DronePool, PoolStats};
use crate::strategy::{strategy_for, SelectionStrategy};

const EVENT_SOURCE: &str = "fleet-manager";

static CLAIMED: AtomicBool = AtomicBool::new(false);

/// Single coordinator for drone pooling, mission assignment and notification
#[derive(Debug)]
pub struct FleetManager {
    pool: DronePool,
    strategy: Box<dyn SelectionStrategy>,
    observers: ObserverRegistry,
}

impl FleetManager {
    /// Claim the process-wide coordinator.
    ///
    /// Fails with [`FleetError::AlreadyClaimed`] on every call after the first.
    pub fn claim(config: &FleetConfig) -> Result<Self> {
        if CLAIMED.swap(true, Ordering::SeqCst) {
            return Err(FleetError::AlreadyClaimed);
        }
        info!("Fleet manager claimed");
        Ok(Self::new(config))
    }

    /// Build a coordinator from configuration
    pub fn new(config: &FleetConfig) -> Self {
        let strategy = strategy_for(config.selection.strategy);
        debug!(
            capacity = config.pool.capacity,
            strategy = strategy.name(),
            delivery = ?config.observers.delivery,
            "Fleet manager initialized"
        );
        Self {
            pool: DronePool::new(config.pool.capacity),
            strategy,
            observers: ObserverRegistry::new(config.observers.delivery),
        }
    }

    /// Register an observer; it receives every subsequent event
    pub fn register_observer(&mut self, observer: Rc<dyn FleetObserver>) -> ObserverId {
        self.observers.register(observer)
    }

    /// Unregister an observer; unknown ids are ignored
    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    /// Replace the active selection strategy
    pub fn set_selection_strategy(&mut self, strategy: Box<dyn SelectionStrategy>) {
        info!(strategy = strategy.name(), "Selection strategy changed");
        self.strategy = strategy;
    }

    /// Name of the active selection strategy
    pub fn selection_strategy(&self) -> &str {
        self.strategy.name()
    }

    /// Preload one drone of each kind: S-1 (survey), C-1 (cargo), X-1 (combat)
    pub fn preload_drones(&mut self) -> Result<()> {
        let drones = [
            SurveyDroneFactory.create("S-1"),
            CargoDroneFactory.create("C-1"),
            CombatDroneFactory.create("X-1"),
        ];
        let size = drones.len();
        let accepted = self.pool.preload(drones.into_iter().map(Rc::new));
        info!(size, accepted, "Drone pool preloaded");

        self.emit(
            EventBuilder::new(event_types::POOL_PRELOADED, EVENT_SOURCE)
                .field("size", size)
                .field("accepted", accepted),
        )
    }

    /// Start a mission builder with the name already set
    pub fn create_mission(&self, name: impl Into<String>) -> MissionBuilder {
        MissionBuilder::new().name(name)
    }

    /// Select a drone with the active strategy, check it out and assign the mission.
    ///
    /// If an observer rejects the `mission.assigned` event the checkout is
    /// undone and the observer error is returned.
    pub fn assign_mission_to_drone(&mut self, mission: &Mission) -> Result<Rc<Drone>> {
        let available = self.pool.available();
        let selected = self.strategy.select(available, mission)?.clone();
        let slot = available
            .iter()
            .position(|d| Rc::ptr_eq(d, &selected))
            .unwrap_or(available.len());
        let drone = self.pool.checkout_specific(&selected)?;
        drone.assign_mission(mission.clone());
        info!(
            drone_id = %drone.identifier(),
            mission = %mission.name(),
            strategy = self.strategy.name(),
            "Mission assigned"
        );

        let notified = self.emit(
            EventBuilder::new(event_types::MISSION_ASSIGNED, EVENT_SOURCE)
                .field("drone_id", drone.identifier())
                .field("mission", mission.to_json()),
        );
        if let Err(err) = notified {
            // A rejected assignment leaves the pool as it was.
            self.pool.undo_checkout(&drone, slot);
            warn!(drone_id = %drone.identifier(), error = %err, "Assignment rolled back");
            return Err(err);
        }
        Ok(drone)
    }

    /// Return a drone to the pool.
    ///
    /// Releasing a drone that is not checked out does nothing, emits no
    /// event and returns `Ok(false)`.
    pub fn release_drone(&mut self, drone: &Rc<Drone>) -> Result<bool> {
        if !self.pool.release(drone) {
            return Ok(false);
        }
        info!(drone_id = %drone.identifier(), "Drone released");

        self.emit(
            EventBuilder::new(event_types::DRONE_RELEASED, EVENT_SOURCE)
                .field("drone_id", drone.identifier()),
        )?;
        Ok(true)
    }

    /// Current pool occupancy
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Translate a legacy mission record
    pub fn adapt_legacy_mission(&mut self, record: &Value) -> Result<Mission> {
        let mission = LegacyMissionAdapter::new(record).to_mission()?;
        debug!(mission = %mission.name(), "Legacy mission adapted");

        self.emit(
            EventBuilder::new(event_types::MISSION_ADAPTED, EVENT_SOURCE)
                .field("mission", mission.to_json()),
        )?;
        Ok(mission)
    }

    /// Create a proxy that builds a drone of `kind` on first use
    pub fn lazy_drone(&mut self, kind: &str, identifier: &str) -> Result<LazyDrone> {
        let kind: DroneKind = kind.parse()?;
        let factory = factory_for(kind);
        let id = identifier.to_string();
        let proxy = LazyDrone::new(identifier, move || factory.create(&id));

        self.emit(
            EventBuilder::new(event_types::PROXY_CREATED, EVENT_SOURCE)
                .field("drone_id", identifier)
                .field("kind", kind.as_str()),
        )?;
        Ok(proxy)
    }

    /// Layer the selected enhancements over a drone, one event per layer
    pub fn enhance_drone(
        &mut self,
        drone: Rc<dyn FleetDrone>,
        options: EnhanceOptions,
    ) -> Result<EnhancedDrone> {
        let mut enhanced = EnhancedDrone::new(drone);
        for enhancement in options.enhancements() {
            enhanced = enhanced.with(enhancement);
            self.emit(
                EventBuilder::new(event_types::DRONE_DECORATED, EVENT_SOURCE)
                    .field("type", enhancement.as_str())
                    .field("drone_id", enhanced.identifier()),
            )?;
        }
        Ok(enhanced)
    }

    fn emit(&self, event: EventBuilder) -> Result<()> {
        self.observers.notify(&event.build())?;
        Ok(())
    }
}
