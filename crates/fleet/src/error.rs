//! Fleet error types

use thiserror::Error;

/// Mission validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Builder finished without a name
    #[error("Mission name not set")]
    MissingName,

    /// Builder finished without a duration
    #[error("Mission duration not set")]
    MissingDuration,

    /// Name was set to an empty string
    #[error("Mission name is required")]
    EmptyName,

    /// Duration was zero or negative
    #[error("Mission duration must be positive, got {0}")]
    NonPositiveDuration(i64),

    /// No waypoints were added
    #[error("Mission requires at least one waypoint")]
    NoWaypoints,

    /// A legacy record field could not be coerced
    #[error("Invalid value for field '{field}': {value}")]
    InvalidField {
        /// Legacy record key
        field: String,
        /// Offending value, JSON rendered
        value: String,
    },
}

/// Observer delivery failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Observer '{observer}' failed on {event_type}: {reason}")]
pub struct ObserverError {
    /// Name reported by the failing observer
    pub observer: String,
    /// Event being delivered
    pub event_type: String,
    /// Failure reason
    pub reason: String,
}

impl ObserverError {
    /// Create a new observer error
    pub fn new(
        observer: impl Into<String>,
        event_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            observer: observer.into(),
            event_type: event_type.into(),
            reason: reason.into(),
        }
    }
}

/// Fleet coordination errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    /// Mission failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Checkout attempted with no available drone
    #[error("No available drones in pool")]
    PoolExhausted,

    /// Selection strategy found an empty available set
    #[error("No drones available")]
    NoDronesAvailable,

    /// Drone kind outside {survey, cargo, combat}
    #[error("Unknown drone kind: {0}")]
    UnknownKind(String),

    /// Specific checkout of a drone that is not available
    #[error("Drone {0} is not available for checkout")]
    InvalidCheckout(String),

    /// A second process-wide coordinator was requested
    #[error("Fleet manager already claimed for this process")]
    AlreadyClaimed,

    /// An observer failed during event delivery
    #[error(transparent)]
    Observer(#[from] ObserverError),
}

/// Result alias for fleet operations
pub type Result<T> = std::result::Result<T, FleetError>;
