use dronefleet_core::logging;
use dronefleet_forum::{CompositeNotifier, EmailNotifier, Forum, PushNotifier, SmsNotifier, Student};

fn main() {
    logging::init();

    let alice = Student::new("Alice", "alice@example.com", "+123456789");
    let bob = Student::new("Bob", "bob@example.com", "+987654321");

    // Channels are swapped or composed here; Forum itself never changes.
    let notifier = CompositeNotifier::new(vec![
        Box::new(EmailNotifier),
        Box::new(SmsNotifier),
        Box::new(PushNotifier),
    ]);
    let mut forum = Forum::new(Box::new(notifier));

    for (author, content) in [(&alice, "Hello, this is my first post!"), (&bob, "Welcome Alice!")] {
        for delivery in forum.add_post(author, content) {
            println!("{delivery}");
        }
        println!("[Forum] {} posted: {}", author.name, content);
    }

    println!("\n[Forum] Listing all posts:");
    for post in forum.posts() {
        println!("{post}");
    }
}
