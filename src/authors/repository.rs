pub mod ddb_author_repository;
pub mod memory_author_repository;

use async_trait::async_trait;
use crate::authors::domain::model::AuthorEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait AuthorRepository: Repository<AuthorEntity> {
    // authors whose full name contains the query, ignoring case
    async fn find_by_name(&self, query: &str) -> LibraryResult<Vec<AuthorEntity>>;
}
