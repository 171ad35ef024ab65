use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindAuthorBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl FindAuthorBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FindAuthorBooksCommandRequest {
    pub(crate) author_id: String,
}

impl FindAuthorBooksCommandRequest {
    pub fn new(author_id: String) -> Self {
        Self {
            author_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct FindAuthorBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindAuthorBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindAuthorBooksCommandRequest, FindAuthorBooksCommandResponse> for FindAuthorBooksCommand {
    async fn execute(&self, req: FindAuthorBooksCommandRequest) -> Result<FindAuthorBooksCommandResponse, CommandError> {
        self.catalog_service.find_books_by_author(req.author_id.as_str())
            .await.map_err(CommandError::from).map(FindAuthorBooksCommandResponse::new)
    }
}
