use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub book_name: String,
    pub author: String,
    pub publisher: String,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Book {}>", self.book_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub book_name: String,
    pub author: String,
    pub publisher: String,
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookChanges {
    pub book_name: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
}
