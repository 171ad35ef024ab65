use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};
use crate::registry::domain::RegistryService;

pub(crate) struct AddAuthorCommand {
    registry_service: Box<dyn RegistryService>,
}

impl AddAuthorCommand {
    pub(crate) fn new(registry_service: Box<dyn RegistryService>) -> Self {
        Self {
            registry_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddAuthorCommandRequest {
    pub(crate) author: AuthorDto,
}

impl AddAuthorCommandRequest {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddAuthorCommandResponse {
    pub author: AuthorDto,
}

impl AddAuthorCommandResponse {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[async_trait]
impl Command<AddAuthorCommandRequest, AddAuthorCommandResponse> for AddAuthorCommand {
    async fn execute(&self, req: AddAuthorCommandRequest) -> Result<AddAuthorCommandResponse, CommandError> {
        self.registry_service.add_author(&req.author)
            .await.map_err(CommandError::from).map(AddAuthorCommandResponse::new)
    }
}
