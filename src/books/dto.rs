use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::validation::{AUTHOR_MIN_CHARS, DESCRIPTION_CHARS, TITLE_MIN_CHARS,
                                       validate_published_date, validate_rating, validate_text};
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i64,
    pub published_date: i64,
}

impl BookDto {
    pub fn new(title: &str, author: &str, description: &str, rating: i64, published_date: i64) -> BookDto {
        BookDto {
            id: 0,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            rating,
            published_date,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookDto {
    fn rating(&self) -> i64 {
        self.rating
    }

    fn published_date(&self) -> i64 {
        self.published_date
    }
}

// BookRequest is the client supplied body for create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i64,
    pub published_date: i64,
}

impl BookRequest {
    pub fn new(title: &str, author: &str, description: &str, rating: i64, published_date: i64) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            rating,
            published_date,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn validate(&self) -> LibraryResult<()> {
        validate_text("title", self.title.as_str(), TITLE_MIN_CHARS, None)?;
        validate_text("author", self.author.as_str(), AUTHOR_MIN_CHARS, None)?;
        validate_text("description", self.description.as_str(),
                      *DESCRIPTION_CHARS.start(), Some(*DESCRIPTION_CHARS.end()))?;
        validate_rating(self.rating)?;
        validate_published_date(self.published_date)?;
        Ok(())
    }

    pub fn build_book(&self, id: i64) -> BookDto {
        BookDto {
            id,
            title: self.title.to_string(),
            author: self.author.to_string(),
            description: self.description.to_string(),
            rating: self.rating,
            published_date: self.published_date,
        }
    }
}
