pub mod service;
pub mod validation;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    // adds a book to an existing author; author_id in the body is ignored
    async fn add_book(&self, author_id: &str, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    async fn update_book(&self, id: &str, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn find_books(&self, query: Option<&str>) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_author(&self, author_id: &str) -> LibraryResult<Vec<BookDto>>;
}
