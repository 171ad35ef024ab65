use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::registry::domain::RegistryService;

pub(crate) struct RemoveAuthorCommand {
    registry_service: Box<dyn RegistryService>,
}

impl RemoveAuthorCommand {
    pub(crate) fn new(registry_service: Box<dyn RegistryService>) -> Self {
        Self {
            registry_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveAuthorCommandRequest {
    pub(crate) author_id: String,
}

impl RemoveAuthorCommandRequest {
    pub fn new(author_id: String) -> Self {
        Self {
            author_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveAuthorCommandResponse {}

#[async_trait]
impl Command<RemoveAuthorCommandRequest, RemoveAuthorCommandResponse> for RemoveAuthorCommand {
    async fn execute(&self, req: RemoveAuthorCommandRequest) -> Result<RemoveAuthorCommandResponse, CommandError> {
        self.registry_service.remove_author(req.author_id.as_str())
            .await.map_err(CommandError::from).map(|_| RemoveAuthorCommandResponse {})
    }
}
