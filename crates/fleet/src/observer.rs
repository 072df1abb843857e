//! Observer registry and shipped observers
//!
//! Observers are invoked synchronously, in registration order, for every
//! event the fleet manager emits. How a failing observer affects the rest
//! is governed by [`DeliveryPolicy`].

use dronefleet_core::{event_types, DeliveryPolicy, Event};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::ObserverError;

/// Reacts to fleet events
pub trait FleetObserver {
    /// Observer name used in error reports
    fn name(&self) -> &str {
        "observer"
    }

    /// Handle one event
    fn update(&self, event: &Event) -> Result<(), ObserverError>;
}

/// Handle returned by registration, used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of registered observers
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Rc<dyn FleetObserver>)>,
    next_id: u64,
    policy: DeliveryPolicy,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new(policy: DeliveryPolicy) -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
            policy,
        }
    }

    /// Append an observer
    pub fn register(&mut self, observer: Rc<dyn FleetObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer; unknown ids are ignored.
    ///
    /// Returns whether an observer was removed.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        before != self.observers.len()
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True when no observer is registered
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Active delivery policy
    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// Deliver an event to every observer in registration order
    pub fn notify(&self, event: &Event) -> Result<(), ObserverError> {
        for (_, observer) in &self.observers {
            if let Err(err) = observer.update(event) {
                match self.policy {
                    DeliveryPolicy::FailFast => return Err(err),
                    DeliveryPolicy::Isolate => {
                        tracing::warn!(
                            observer = %err.observer,
                            event_type = %err.event_type,
                            reason = %err.reason,
                            "Observer failed, continuing delivery"
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Counts adapted and assigned missions
#[derive(Debug, Default)]
pub struct MissionCountObserver {
    created: Cell<u64>,
    assigned: Cell<u64>,
}

impl MissionCountObserver {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Missions created through the legacy adapter
    pub fn created(&self) -> u64 {
        self.created.get()
    }

    /// Missions assigned to drones
    pub fn assigned(&self) -> u64 {
        self.assigned.get()
    }

    /// Summary line
    pub fn stats(&self) -> String {
        format!(
            "missions_created={}, missions_assigned={}",
            self.created(),
            self.assigned()
        )
    }
}

impl FleetObserver for MissionCountObserver {
    fn name(&self) -> &str {
        "mission-count"
    }

    fn update(&self, event: &Event) -> Result<(), ObserverError> {
        match event.event_type.as_str() {
            event_types::MISSION_ADAPTED => self.created.set(self.created.get() + 1),
            event_types::MISSION_ASSIGNED => self.assigned.set(self.assigned.get() + 1),
            _ => {}
        }
        Ok(())
    }
}

/// Records every event it receives
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<Event>>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the recorded events
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Recorded event types, in delivery order
    pub fn event_types(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .map(|e| e.event_type.clone())
            .collect()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl FleetObserver for EventLog {
    fn name(&self) -> &str {
        "event-log"
    }

    fn update(&self, event: &Event) -> Result<(), ObserverError> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}
