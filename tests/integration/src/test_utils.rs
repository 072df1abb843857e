//! Shared fixtures for fleet and forum integration tests

use dronefleet_core::{DeliveryPolicy, Event, FleetConfig, StrategyKind};
use dronefleet_fleet::{FleetManager, FleetObserver, Mission, ObserverError};
use std::cell::RefCell;
use std::rc::Rc;

/// Install a test-friendly subscriber; repeated calls are harmless
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// Build an unguarded manager with the given knobs
pub fn manager_with(
    capacity: usize,
    strategy: StrategyKind,
    delivery: DeliveryPolicy,
) -> FleetManager {
    let mut config = FleetConfig::default();
    config.pool.capacity = capacity;
    config.selection.strategy = strategy;
    config.observers.delivery = delivery;
    FleetManager::new(&config)
}

/// The survey mission used throughout the scenarios
pub fn survey_mission(fm: &FleetManager) -> Mission {
    fm.create_mission("Survey Sector 7")
        .add_waypoint("WP-1")
        .add_waypoint("WP-2")
        .duration(30)
        .priority(2)
        .payload("HD Camera")
        .build()
        .expect("survey mission is valid")
}

/// Shared record of (observer name, event) pairs in delivery order
pub type Trace = Rc<RefCell<Vec<(String, Event)>>>;

/// Observer that appends every delivery to a shared trace, optionally failing
pub struct RecordingObserver {
    name: String,
    trace: Trace,
    fail: bool,
}

impl RecordingObserver {
    /// Recording observer that always succeeds
    pub fn new(name: &str, trace: &Trace) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            trace: trace.clone(),
            fail: false,
        })
    }

    /// Recording observer that records, then reports a failure
    pub fn failing(name: &str, trace: &Trace) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            trace: trace.clone(),
            fail: true,
        })
    }
}

impl FleetObserver for RecordingObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, event: &Event) -> Result<(), ObserverError> {
        self.trace
            .borrow_mut()
            .push((self.name.clone(), event.clone()));
        if self.fail {
            return Err(ObserverError::new(&self.name, &event.event_type, "configured to fail"));
        }
        Ok(())
    }
}

/// Observer names in the trace for one event type
pub fn deliveries_for(trace: &Trace, event_type: &str) -> Vec<String> {
    trace
        .borrow()
        .iter()
        .filter(|(_, e)| e.event_type == event_type)
        .map(|(name, _)| name.clone())
        .collect()
}
