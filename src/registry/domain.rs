pub mod service;

use async_trait::async_trait;
use crate::authors::dto::AuthorDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait RegistryService: Sync + Send {
    async fn add_author(&self, author: &AuthorDto) -> LibraryResult<AuthorDto>;
    async fn remove_author(&self, id: &str) -> LibraryResult<()>;
    async fn update_author(&self, id: &str, author: &AuthorDto) -> LibraryResult<AuthorDto>;
    async fn find_author_by_id(&self, id: &str) -> LibraryResult<AuthorDto>;
    // every author when query is None, otherwise those whose name contains it
    async fn find_authors(&self, query: Option<&str>) -> LibraryResult<Vec<AuthorDto>>;
}
