pub mod ddb_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // books whose title contains the query, ignoring case
    async fn find_by_title(&self, query: &str) -> LibraryResult<Vec<BookEntity>>;

    async fn find_by_author_id(&self, author_id: &str) -> LibraryResult<Vec<BookEntity>>;
}
