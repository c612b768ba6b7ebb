pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub(crate) const BOOKS_NOT_FOUND_BY_RATING: &str = "Books not found by rating";
pub(crate) const BOOKS_NOT_FOUND_BY_PUBLISHED_DATE: &str = "Books not found by published date";

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    // a missing rating matches no book
    async fn find_books_by_rating(&self, rating: Option<i64>) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_published_date(&self, published_date: Option<i64>) -> LibraryResult<Vec<BookDto>>;
    // the id of the given book is ignored, the stored book carries the assigned one
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
}
