//! Integration tests for the DroneFleet workspace
//!
//! This test suite validates:
//! - End-to-end fleet coordination through the `FleetManager` facade
//! - Pool capacity invariants under arbitrary checkout/release sequences
//! - Observer delivery order and failure policies
//! - Forum notification fan-out

pub mod test_utils;


#[cfg(test)]
mod pool_properties;

#[cfg(test)]
mod forum_scenarios;
