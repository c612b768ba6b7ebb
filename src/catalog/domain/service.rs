use std::sync::Arc;
use async_trait::async_trait;
use tracing::{error, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{BOOKS_NOT_FOUND_BY_PUBLISHED_DATE, BOOKS_NOT_FOUND_BY_RATING, CatalogService};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }

    fn non_empty(books: Vec<BookEntity>, message: &str) -> LibraryResult<Vec<BookDto>> {
        if books.is_empty() {
            Err(LibraryError::not_found(message))
        } else {
            Ok(books.iter().map(BookDto::from).collect())
        }
    }

    // the collection has already changed by the time an event goes out, so a failed publish is only logged
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            error!(error = %err, "failed to publish book event");
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_books_by_rating(&self, rating: Option<i64>) -> LibraryResult<Vec<BookDto>> {
        let res = match rating {
            Some(rating) => self.book_repository.find_by_rating(rating).await?,
            None => vec![],
        };
        Self::non_empty(res, BOOKS_NOT_FOUND_BY_RATING)
    }

    async fn find_books_by_published_date(&self, published_date: Option<i64>) -> LibraryResult<Vec<BookDto>> {
        let res = match published_date {
            Some(published_date) => self.book_repository.find_by_published_date(published_date).await?,
            None => vec![],
        };
        Self::non_empty(res, BOOKS_NOT_FOUND_BY_PUBLISHED_DATE)
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let saved = self.book_repository.create(&BookEntity::from(book)).await.map(|b| BookDto::from(&b))?;
        info!(book_id = saved.id, title = %saved.title, "added book");
        self.publish(DomainEvent::added("books", saved.id.to_string().as_str(), &saved)).await;
        Ok(saved)
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.update(&BookEntity::from(book)).await?;
        info!(book_id = book.id, "updated book");
        self.publish(DomainEvent::updated("books", book.id.to_string().as_str(), book)).await;
        Ok(book.clone())
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        let _ = self.book_repository.delete(id).await?;
        info!(book_id = id, "removed book");
        self.publish(DomainEvent::deleted("books", id.to_string().as_str(), &id)).await;
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            description: other.description.to_string(),
            rating: other.rating,
            published_date: other.published_date,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            description: other.description.to_string(),
            rating: other.rating,
            published_date: other.published_date,
        }
    }
}
