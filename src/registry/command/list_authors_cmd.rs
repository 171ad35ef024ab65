use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};
use crate::registry::domain::RegistryService;

pub(crate) struct ListAuthorsCommand {
    registry_service: Box<dyn RegistryService>,
}

impl ListAuthorsCommand {
    pub(crate) fn new(registry_service: Box<dyn RegistryService>) -> Self {
        Self {
            registry_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListAuthorsCommandRequest {
    pub(crate) query: Option<String>,
}

impl ListAuthorsCommandRequest {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            query: query.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListAuthorsCommandResponse {
    pub authors: Vec<AuthorDto>,
}

impl ListAuthorsCommandResponse {
    pub fn new(authors: Vec<AuthorDto>) -> Self {
        Self {
            authors,
        }
    }
}

#[async_trait]
impl Command<ListAuthorsCommandRequest, ListAuthorsCommandResponse> for ListAuthorsCommand {
    async fn execute(&self, req: ListAuthorsCommandRequest) -> Result<ListAuthorsCommandResponse, CommandError> {
        self.registry_service.find_authors(req.query.as_deref())
            .await.map_err(CommandError::from).map(ListAuthorsCommandResponse::new)
    }
}
