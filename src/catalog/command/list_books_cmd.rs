use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
    pub(crate) query: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            query: query.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.find_books(req.query.as_deref())
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let state = AppState::build(Configuration::new("test"), RepositoryStore::Memory).await;
        for title in ["The Peripheral", "Agency", "Pattern Recognition"] {
            let _ = state.book_repository.create(&BookEntity::new("a1", title, 1234567890, 2014, None))
                .await.expect("should create book");
        }

        let cmd = ListBooksCommand::new(factory::create_catalog_service(&state));
        let all = cmd.execute(ListBooksCommandRequest::new(None)).await.expect("should list books");
        assert_eq!(3, all.books.len());

        let found = cmd.execute(ListBooksCommandRequest::new(Some("peripheral"))).await.expect("should search books");
        assert_eq!(1, found.books.len());
        assert_eq!(Some("The Peripheral".to_string()), found.books[0].title);
    }
}
