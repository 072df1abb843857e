//! Mission domain models
//!
//! Provides the immutable [`Mission`] value object, the fluent
//! [`MissionBuilder`] that is the only way to produce one, and the adapter
//! for legacy mission records.

pub mod builder;
pub mod legacy;
pub mod model;

pub use builder::MissionBuilder;
pub use legacy::LegacyMissionAdapter;
pub use model::{Mission, DEFAULT_PRIORITY};
