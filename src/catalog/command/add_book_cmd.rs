use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) author_id: String,
    pub(crate) book: BookDto,
}

impl AddBookCommandRequest {
    pub fn new(author_id: &str, book: BookDto) -> Self {
        Self {
            author_id: author_id.to_string(),
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.author_id.as_str(), &req.book)
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::authors::domain::model::AuthorEntity;
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref STATE: AsyncOnce<AppState> = AsyncOnce::new(async {
                AppState::build(Configuration::new("test"), RepositoryStore::Memory).await
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let state = STATE.get().await;
        let author = state.author_repository.create(&AuthorEntity::new("Ann Leckie")).await.expect("should create author");
        let cmd = AddBookCommand::new(factory::create_catalog_service(state));

        let book = BookDto::new("Ancillary Justice", 9780316246620, 2013, Some("english"));
        let res = cmd.execute(AddBookCommandRequest::new(author.author_id.as_str(), book))
            .await.expect("should add book");
        assert!(res.book.id.is_some());
        assert_eq!(Some(author.author_id), res.book.author_id);
    }

    #[tokio::test]
    async fn test_should_fail_add_book_with_short_isbn() {
        let state = STATE.get().await;
        let author = state.author_repository.create(&AuthorEntity::new("Ann Leckie")).await.expect("should create author");
        let cmd = AddBookCommand::new(factory::create_catalog_service(state));

        let res = cmd.execute(AddBookCommandRequest::new(author.author_id.as_str(), BookDto::new("X", 123, 2000, None))).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
