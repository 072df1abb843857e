//! Forum notification scenarios

use dronefleet_forum::{
    Channel, CompositeNotifier, Delivery, EmailNotifier, Forum, Notifier, NullNotifier,
    PushNotifier, SmsNotifier, Student,
};
use std::cell::RefCell;
use std::rc::Rc;

fn alice() -> Student {
    Student::new("Alice", "alice@example.com", "+123456789")
}

fn bob() -> Student {
    Student::new("Bob", "bob@example.com", "+987654321")
}

/// Third-party channel plugged in without touching the forum
struct Outbox {
    sent: Rc<RefCell<Vec<String>>>,
}

impl Notifier for Outbox {
    fn send_notification(&self, student: &Student, message: &str) -> Vec<Delivery> {
        self.sent
            .borrow_mut()
            .push(format!("{} <- {}", student.name, message));
        Vec::new()
    }
}

#[test]
fn test_every_channel_fires_in_order() {
    let notifier = CompositeNotifier::new(vec![
        Box::new(EmailNotifier),
        Box::new(SmsNotifier),
        Box::new(PushNotifier),
    ]);
    let mut forum = Forum::new(Box::new(notifier));

    let lines: Vec<String> = forum
        .add_post(&alice(), "Hello, this is my first post!")
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        lines,
        vec![
            "[EmailNotifier] Sending email to alice@example.com: New post created: Hello, this is my first post!",
            "[SMSNotifier] Sending SMS to +123456789: New post created: Hello, this is my first post!",
            "[PushNotifier] Sending push to Alice: New post created: Hello, this is my first post!",
        ]
    );
}

#[test]
fn test_posts_listed_in_creation_order() {
    let mut forum = Forum::new(Box::new(EmailNotifier));
    forum.add_post(&alice(), "Hello, this is my first post!");
    let replies = forum.add_post(&bob(), "Welcome Alice!");

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].channel, Channel::Email);
    assert_eq!(replies[0].recipient, "bob@example.com");

    let listing: Vec<String> = forum.posts().iter().map(ToString::to_string).collect();
    assert_eq!(
        listing,
        vec!["Alice: Hello, this is my first post!", "Bob: Welcome Alice!"]
    );
}

#[test]
fn test_custom_channel_composes_with_builtins() {
    let sent = Rc::new(RefCell::new(Vec::new()));
    let mut notifier = CompositeNotifier::new(vec![Box::new(SmsNotifier)]);
    notifier.push(Box::new(Outbox { sent: sent.clone() }));
    assert_eq!(notifier.len(), 2);

    let mut forum = Forum::new(Box::new(notifier));
    let deliveries = forum.add_post(&bob(), "Welcome Alice!");

    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].channel, Channel::Sms);
    assert_eq!(*sent.borrow(), vec!["Bob <- New post created: Welcome Alice!"]);
}

#[test]
fn test_silent_forum_still_stores_posts() {
    let mut forum = Forum::new(Box::new(NullNotifier));
    assert!(forum.add_post(&alice(), "Quiet post").is_empty());
    assert_eq!(forum.posts().len(), 1);
    assert_eq!(forum.posts()[0].content, "Quiet post");
}
