//! Core functionality for the DroneFleet workspace.
//!
//! This crate provides the ambient pieces shared by the fleet and forum
//! crates: configuration, structured logging, error types and the event
//! record delivered to observers.

pub mod config;
pub mod error;
pub mod event;
pub mod logging;

pub use config::{
    DeliveryPolicy, FleetConfig, LogFormat, LoggingConfig, ObserverConfig, PoolConfig,
    SelectionConfig, StrategyKind,
};
pub use error::{CoreError, Result};
pub use event::{event_types, Event, EventBuilder, EventPayload};
