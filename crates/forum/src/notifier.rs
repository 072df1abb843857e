//! Notification channels
//!
//! The forum depends only on the [`Notifier`] trait. Channels report what
//! they sent as [`Delivery`] records; rendering them is left to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Student;

/// Channel a delivery went out on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Email to the student's address
    Email,
    /// Text message to the student's phone
    Sms,
    /// Push notification addressed by name
    Push,
}

impl Channel {
    fn notifier_name(&self) -> &'static str {
        match self {
            Channel::Email => "EmailNotifier",
            Channel::Sms => "SMSNotifier",
            Channel::Push => "PushNotifier",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Channel::Email => "Sending email to",
            Channel::Sms => "Sending SMS to",
            Channel::Push => "Sending push to",
        }
    }
}

/// One notification sent on one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Channel used
    pub channel: Channel,
    /// Address on that channel
    pub recipient: String,
    /// Message body
    pub message: String,
}

impl Delivery {
    fn new(channel: Channel, recipient: &str, message: &str) -> Self {
        tracing::debug!(?channel, recipient, "Notification sent");
        Self {
            channel,
            recipient: recipient.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.channel.notifier_name(),
            self.channel.verb(),
            self.recipient,
            self.message
        )
    }
}

/// Sends a message to a student
pub trait Notifier {
    /// Notify `student`, returning the deliveries made
    fn send_notification(&self, student: &Student, message: &str) -> Vec<Delivery>;
}

/// Email channel
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn send_notification(&self, student: &Student, message: &str) -> Vec<Delivery> {
        vec![Delivery::new(Channel::Email, &student.email, message)]
    }
}

/// SMS channel
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

impl Notifier for SmsNotifier {
    fn send_notification(&self, student: &Student, message: &str) -> Vec<Delivery> {
        vec![Delivery::new(Channel::Sms, &student.phone, message)]
    }
}

/// Push channel
#[derive(Debug, Clone, Copy, Default)]
pub struct PushNotifier;

impl Notifier for PushNotifier {
    fn send_notification(&self, student: &Student, message: &str) -> Vec<Delivery> {
        vec![Delivery::new(Channel::Push, &student.name, message)]
    }
}

/// Sends nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn send_notification(&self, _student: &Student, _message: &str) -> Vec<Delivery> {
        Vec::new()
    }
}

/// Fans a message out to several notifiers, in order
#[derive(Default)]
pub struct CompositeNotifier {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl CompositeNotifier {
    /// Compose the given notifiers
    pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    /// Append another notifier
    pub fn push(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of composed notifiers
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// True when nothing is composed
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Notifier for CompositeNotifier {
    fn send_notification(&self, student: &Student, message: &str) -> Vec<Delivery> {
        self.notifiers
            .iter()
            .flat_map(|n| n.send_notification(student, message))
            .collect()
    }
}
