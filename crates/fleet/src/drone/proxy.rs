//! Lazily constructed drone proxy

use std::cell::OnceCell;
use std::fmt;

use super::model::{Drone, FleetDrone};
use crate::mission::Mission;

type Constructor = Box<dyn Fn() -> Drone>;

/// Stand-in that builds the real drone on first functional use.
///
/// `capabilities` and `assign_mission` realize the drone; `active_mission`
/// and `clear_mission` only touch it once it exists.
pub struct LazyDrone {
    identifier: String,
    constructor: Constructor,
    real: OnceCell<Drone>,
}

impl LazyDrone {
    /// Create a proxy around a construction function
    pub fn new(identifier: impl Into<String>, constructor: impl Fn() -> Drone + 'static) -> Self {
        Self {
            identifier: identifier.into(),
            constructor: Box::new(constructor),
            real: OnceCell::new(),
        }
    }

    /// Whether the real drone has been constructed
    pub fn is_realized(&self) -> bool {
        self.real.get().is_some()
    }

    fn realize(&self) -> &Drone {
        self.real.get_or_init(|| {
            tracing::debug!(drone_id = %self.identifier, "Realizing lazy drone");
            (self.constructor)()
        })
    }
}

impl FleetDrone for LazyDrone {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn capabilities(&self) -> String {
        self.realize().capabilities()
    }

    fn assign_mission(&self, mission: Mission) {
        self.realize().assign_mission(mission);
    }

    fn clear_mission(&self) {
        if let Some(real) = self.real.get() {
            real.clear_mission();
        }
    }

    fn active_mission(&self) -> Option<Mission> {
        self.real.get().and_then(|real| real.active_mission())
    }
}

impl fmt::Debug for LazyDrone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyDrone")
            .field("identifier", &self.identifier)
            .field("real", &self.real.get())
            .finish_non_exhaustive()
    }
}
