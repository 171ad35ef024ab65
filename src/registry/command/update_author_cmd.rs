use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};
use crate::registry::domain::RegistryService;

pub(crate) struct UpdateAuthorCommand {
    registry_service: Box<dyn RegistryService>,
}

impl UpdateAuthorCommand {
    pub(crate) fn new(registry_service: Box<dyn RegistryService>) -> Self {
        Self {
            registry_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateAuthorCommandRequest {
    pub(crate) author_id: String,
    pub(crate) author: AuthorDto,
}

impl UpdateAuthorCommandRequest {
    pub fn new(author_id: &str, author: AuthorDto) -> Self {
        Self {
            author_id: author_id.to_string(),
            author,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateAuthorCommandResponse {
    pub author: AuthorDto,
}

impl UpdateAuthorCommandResponse {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[async_trait]
impl Command<UpdateAuthorCommandRequest, UpdateAuthorCommandResponse> for UpdateAuthorCommand {
    async fn execute(&self, req: UpdateAuthorCommandRequest) -> Result<UpdateAuthorCommandResponse, CommandError> {
        self.registry_service.update_author(req.author_id.as_str(), &req.author)
            .await.map_err(CommandError::from).map(UpdateAuthorCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::authors::dto::AuthorDto;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::registry::command::update_author_cmd::{UpdateAuthorCommand, UpdateAuthorCommandRequest};
    use crate::registry::factory;

    #[tokio::test]
    async fn test_should_run_update_author() {
        let state = AppState::build(Configuration::new("test"), RepositoryStore::Memory).await;
        let author = factory::create_registry_service(&state).add_author(&AuthorDto::new("J. G. Ballard"))
            .await.expect("should add author");
        let id = author.id.clone().unwrap_or_default();

        let cmd = UpdateAuthorCommand::new(factory::create_registry_service(&state));
        let res = cmd.execute(UpdateAuthorCommandRequest::new(id.as_str(), AuthorDto::with_id(id.as_str(), "James Graham Ballard")))
            .await.expect("should update author");
        assert_eq!("James Graham Ballard", res.author.full_name.as_str());
        assert_eq!(Some(id), res.author.id);
    }

    #[tokio::test]
    async fn test_should_fail_update_missing_author() {
        let state = AppState::build(Configuration::new("test"), RepositoryStore::Memory).await;
        let cmd = UpdateAuthorCommand::new(factory::create_registry_service(&state));
        let res = cmd.execute(UpdateAuthorCommandRequest::new("missing", AuthorDto::with_id("missing", "Nobody"))).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
