use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::DDBBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, create_table};

pub(crate) async fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Arc<dyn BookRepository> {
    match store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(store, config).await;
            Arc::new(DDBBookRepository::new(client, config.books_table.as_str(), config.books_index().as_str()))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(store, config).await;
            let _ = create_table(&client, config.books_table.as_str(), "book_id", Some(("author_id", "created_at"))).await;
            Arc::new(DDBBookRepository::new(client, config.books_table.as_str(), config.books_index().as_str()))
        }
        RepositoryStore::Memory => {
            Arc::new(MemoryBookRepository::new())
        }
    }
}
