use serde::{Deserialize, Serialize};
use crate::core::library::BookStatus;

// BookEntity abstracts a physical book in the library. One record is one
// copy; there is no multi-copy inventory.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
}

impl BookEntity {
    pub fn new(book_id: i64, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.book_status == BookStatus::Available
    }
}
