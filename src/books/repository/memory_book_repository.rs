use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::{BOOK_DOES_NOT_EXIST, BOOK_NOT_FOUND, BookRepository};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the collection in insertion order behind a single lock so that
// every scan-and-mutate step is atomic.
#[derive(Debug)]
pub(crate) struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    // max + 1 so a deleted tail never leads to a reused id that still exists
    fn next_id(books: &[BookEntity]) -> i64 {
        books.iter().map(|b| b.id()).max().map_or(1, |id| id + 1)
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        let mut book = entity.clone();
        book.id = Self::next_id(&books);
        books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id() == entity.id()) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(BOOK_NOT_FOUND)),
        }
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.iter().find(|b| b.id() == id).cloned()
            .ok_or_else(|| LibraryError::not_found(BOOK_DOES_NOT_EXIST))
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.id() == id) {
            Some(ndx) => {
                books.remove(ndx);
                Ok(1)
            }
            None => Err(LibraryError::not_found(BOOK_NOT_FOUND)),
        }
    }

    async fn all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_rating(&self, rating: i64) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().filter(|b| b.rating() == rating).cloned().collect())
    }

    async fn find_by_published_date(&self, published_date: i64) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().filter(|b| b.published_date() == published_date).cloned().collect())
    }
}
