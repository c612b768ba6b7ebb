use std::sync::Arc;
use crate::books::domain::model::seed_books;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(store: RepositoryStore) -> Arc<dyn BookRepository> {
    match store {
        RepositoryStore::SeededMemory => {
            Arc::new(MemoryBookRepository::new(seed_books()))
        }
        RepositoryStore::EmptyMemory => {
            Arc::new(MemoryBookRepository::new(vec![]))
        }
    }
}
