//! Fixed-capacity drone pool
//!
//! Tracks which drones are available and which are checked out. A drone is
//! in exactly one of the two sets, and together they never hold more than
//! the pool capacity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

use crate::drone::{Drone, FleetDrone};
use crate::error::{FleetError, Result};

/// Snapshot of pool occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Drones ready for checkout
    pub available: usize,
    /// Drones currently checked out
    pub in_use: usize,
}

impl PoolStats {
    /// Drones tracked by the pool
    pub fn total(&self) -> usize {
        self.available + self.in_use
    }
}

impl fmt::Display for PoolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "available={}, in_use={}", self.available, self.in_use)
    }
}

/// Pool of reusable drones
#[derive(Debug)]
pub struct DronePool {
    available: Vec<Rc<Drone>>,
    in_use: Vec<Rc<Drone>>,
    capacity: usize,
}

impl DronePool {
    /// Create an empty pool
    pub fn new(capacity: usize) -> Self {
        Self {
            available: Vec::with_capacity(capacity),
            in_use: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of tracked drones
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add drones while there is room; the rest are dropped.
    ///
    /// Returns how many drones were accepted.
    pub fn preload<I>(&mut self, drones: I) -> usize
    where
        I: IntoIterator<Item = Rc<Drone>>,
    {
        let mut accepted = 0;
        let mut dropped = 0;
        for drone in drones {
            if self.available.len() + self.in_use.len() < self.capacity {
                self.available.push(drone);
                accepted += 1;
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            tracing::debug!(
                accepted,
                dropped,
                capacity = self.capacity,
                "Preload exceeded pool capacity"
            );
        }
        accepted
    }

    /// Check out the most recently available drone
    pub fn checkout(&mut self) -> Result<Rc<Drone>> {
        let drone = self.available.pop().ok_or(FleetError::PoolExhausted)?;
        self.in_use.push(drone.clone());
        tracing::debug!(drone_id = %drone.identifier(), "Drone checked out");
        Ok(drone)
    }

    /// Check out one particular drone
    pub fn checkout_specific(&mut self, drone: &Rc<Drone>) -> Result<Rc<Drone>> {
        let index = self
            .available
            .iter()
            .position(|d| Rc::ptr_eq(d, drone))
            .ok_or_else(|| FleetError::InvalidCheckout(drone.identifier().to_string()))?;

        let drone = self.available.remove(index);
        self.in_use.push(drone.clone());
        tracing::debug!(drone_id = %drone.identifier(), "Drone checked out");
        Ok(drone)
    }

    /// Return a checked-out drone to the pool, clearing its mission.
    ///
    /// Drones that are not checked out are left alone and `false` is returned.
    pub fn release(&mut self, drone: &Rc<Drone>) -> bool {
        let Some(index) = self.in_use.iter().position(|d| Rc::ptr_eq(d, drone)) else {
            tracing::debug!(drone_id = %drone.identifier(), "Release ignored, drone not in use");
            return false;
        };

        let drone = self.in_use.remove(index);
        drone.clear_mission();
        tracing::debug!(drone_id = %drone.identifier(), "Drone released");
        self.available.push(drone);
        true
    }

    /// Put a drone checked out with [`Self::checkout_specific`] back where it was.
    ///
    /// The mission is cleared and the drone rejoins the available set at
    /// `index`, so selection order is as before the checkout.
    pub(crate) fn undo_checkout(&mut self, drone: &Rc<Drone>, index: usize) -> bool {
        let Some(pos) = self.in_use.iter().position(|d| Rc::ptr_eq(d, drone)) else {
            return false;
        };

        let drone = self.in_use.remove(pos);
        drone.clear_mission();
        tracing::debug!(drone_id = %drone.identifier(), "Checkout rolled back");
        let index = index.min(self.available.len());
        self.available.insert(index, drone);
        true
    }

    /// Available drones, oldest first
    pub fn available(&self) -> &[Rc<Drone>] {
        &self.available
    }

    /// Checked-out drones, oldest first
    pub fn in_use(&self) -> &[Rc<Drone>] {
        &self.in_use
    }

    /// Current occupancy
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            available: self.available.len(),
            in_use: self.in_use.len(),
        }
    }
}
