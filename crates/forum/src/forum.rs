//! Forum post board

use crate::models::{Post, Student};
use crate::notifier::{Delivery, Notifier};

/// Stores posts and notifies authors through an injected notifier
pub struct Forum {
    notifier: Box<dyn Notifier>,
    posts: Vec<Post>,
}

impl Forum {
    /// Create an empty forum
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self {
            notifier,
            posts: Vec::new(),
        }
    }

    /// Store a post and notify its author
    pub fn add_post(&mut self, student: &Student, content: &str) -> Vec<Delivery> {
        self.posts.push(Post::new(student.clone(), content));
        tracing::info!(author = %student.name, "Post created");
        self.notifier
            .send_notification(student, &format!("New post created: {content}"))
    }

    /// Posts in creation order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}
