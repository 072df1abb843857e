//! Configuration management for DroneFleet.
//!
//! Every section carries defaults, so an empty TOML document yields the
//! same configuration as [`FleetConfig::default`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, Result};

/// Top-level configuration for a fleet coordinator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Drone pool sizing
    pub pool: PoolConfig,
    /// Initial selection strategy
    pub selection: SelectionConfig,
    /// Observer delivery behaviour
    pub observers: ObserverConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// Drone pool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of drones tracked by the pool (available + in use)
    pub capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { capacity: 5 }
    }
}

/// Shipped selection strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Most recently available drone
    #[default]
    Simple,
    /// Mission-aware preference for combat/survey drones
    Priority,
}

/// Selection strategy configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Strategy active when the coordinator is constructed
    pub strategy: StrategyKind,
}

/// What happens to the remaining observers when one of them fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Stop at the first failing observer and surface its error
    #[default]
    FailFast,
    /// Log the failure and keep delivering
    Isolate,
}

/// Observer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Failure handling during event delivery
    pub delivery: DeliveryPolicy,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Plain,
            level: "info".to_string(),
        }
    }
}

impl FleetConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FleetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the coordinator cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.pool.capacity == 0 {
            return Err(CoreError::InvalidConfig {
                field: "pool.capacity".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                field: "logging.level".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
