use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is a record as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i64,
    pub published_date: i64,
}

impl BookEntity {
    pub fn new(id: i64, title: &str, author: &str, description: &str,
               rating: i64, published_date: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            rating,
            published_date,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn rating(&self) -> i64 {
        self.rating
    }

    fn published_date(&self) -> i64 {
        self.published_date
    }
}

/// Records loaded into a fresh collection.
pub(crate) fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new(1, "Computer Science Pro", "John Doe", "A book about computer science", 5, 2030),
        BookEntity::new(2, "Be Fast with FastAPI", "John Doe", "A greatbook!", 5, 2030),
        BookEntity::new(3, "Master Endpoints", "John Doe", "A awesome book", 5, 2029),
        BookEntity::new(4, "HP1", "Author 1", "Book Description", 2, 2028),
        BookEntity::new(5, "HP2", "Author 2", "Book Description", 3, 2027),
        BookEntity::new(6, "HP3", "Author 3", "Book Description", 1, 2026),
    ]
}
