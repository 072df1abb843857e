//! DroneFleet course forum
//!
//! A small post board whose notifications go through the [`Notifier`]
//! abstraction. Channels can be swapped or composed without touching
//! [`Forum`].

#![warn(missing_docs)]

pub mod forum;
pub mod models;
pub mod notifier;

pub use forum::Forum;
pub use models::{Post, Student};
pub use notifier::{
    Channel, CompositeNotifier, Delivery, EmailNotifier, Notifier, NullNotifier, PushNotifier,
    SmsNotifier,
};
