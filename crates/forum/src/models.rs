//! Forum participants and posts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Student identity and contact data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
}

impl Student {
    /// Create a new student
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.email, self.phone)
    }
}

/// A forum post and its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Author
    pub author: Student,
    /// Post body
    pub content: String,
}

impl Post {
    /// Create a new post
    pub fn new(author: Student, content: impl Into<String>) -> Self {
        Self {
            author,
            content: content.into(),
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author.name, self.content)
    }
}
