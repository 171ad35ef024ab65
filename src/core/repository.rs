use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::core::library::{LibraryError, LibraryResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // creates an entity and returns it with the identifier assigned by the store
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // updates an entity in a single conditional write, NotFound if no entity has its id
    async fn update(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // deletes an entity in a single conditional write, NotFound if it does not exist
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities, oldest first
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    Memory,
}

impl TryFrom<String> for RepositoryStore {
    type Error = LibraryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "DynamoDB" => Ok(RepositoryStore::DynamoDB),
            "LocalDynamoDB" => Ok(RepositoryStore::LocalDynamoDB),
            "Memory" => Ok(RepositoryStore::Memory),
            _ => Err(LibraryError::validation(
                format!("unknown repository store {:?}, expected DynamoDB, LocalDynamoDB or Memory", s).as_str(),
                Some("store".to_string()))),
        }
    }
}

impl RepositoryStore {
    // an unset or unrecognised override keeps the branch default
    pub fn resolve(value: Option<String>, default: RepositoryStore) -> RepositoryStore {
        match value.map(RepositoryStore::try_from) {
            Some(Ok(store)) => store,
            Some(Err(err)) => {
                warn!(default = ?default, "ignoring store override: {}", err);
                default
            }
            None => default,
        }
    }
}
