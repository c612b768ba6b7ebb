use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity and returns the stored copy with its assigned id
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> LibraryResult<usize>;

    // all entities in insertion order
    async fn all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    SeededMemory,
    EmptyMemory,
}

impl RepositoryStore {
    pub fn from_seed(seed: bool) -> RepositoryStore {
        if seed {
            RepositoryStore::SeededMemory
        } else {
            RepositoryStore::EmptyMemory
        }
    }
}
