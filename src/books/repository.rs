pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub(crate) const BOOK_DOES_NOT_EXIST: &str = "Book does not exist";
pub(crate) const BOOK_NOT_FOUND: &str = "Book not found";

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    async fn find_by_rating(&self, rating: i64) -> LibraryResult<Vec<BookEntity>>;

    async fn find_by_published_date(&self, published_date: i64) -> LibraryResult<Vec<BookEntity>>;
}
