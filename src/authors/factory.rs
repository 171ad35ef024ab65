use std::sync::Arc;
use crate::authors::repository::AuthorRepository;
use crate::authors::repository::ddb_author_repository::DDBAuthorRepository;
use crate::authors::repository::memory_author_repository::MemoryAuthorRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, create_table};

pub(crate) async fn create_author_repository(config: &Configuration, store: RepositoryStore) -> Arc<dyn AuthorRepository> {
    match store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(store, config).await;
            Arc::new(DDBAuthorRepository::new(client, config.authors_table.as_str()))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(store, config).await;
            let _ = create_table(&client, config.authors_table.as_str(), "author_id", None).await;
            Arc::new(DDBAuthorRepository::new(client, config.authors_table.as_str()))
        }
        RepositoryStore::Memory => {
            Arc::new(MemoryAuthorRepository::new())
        }
    }
}
