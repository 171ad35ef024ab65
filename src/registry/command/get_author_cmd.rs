use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::authors::dto::AuthorDto;
use crate::core::command::{Command, CommandError};
use crate::registry::domain::RegistryService;

pub(crate) struct GetAuthorCommand {
    registry_service: Box<dyn RegistryService>,
}

impl GetAuthorCommand {
    pub(crate) fn new(registry_service: Box<dyn RegistryService>) -> Self {
        Self {
            registry_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetAuthorCommandRequest {
    pub(crate) author_id: String,
}

impl GetAuthorCommandRequest {
    pub fn new(author_id: String) -> Self {
        Self {
            author_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetAuthorCommandResponse {
    pub author: AuthorDto,
}

impl GetAuthorCommandResponse {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[async_trait]
impl Command<GetAuthorCommandRequest, GetAuthorCommandResponse> for GetAuthorCommand {
    async fn execute(&self, req: GetAuthorCommandRequest) -> Result<GetAuthorCommandResponse, CommandError> {
        self.registry_service.find_author_by_id(req.author_id.as_str())
            .await.map_err(CommandError::from).map(GetAuthorCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::authors::dto::AuthorDto;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::registry::command::add_author_cmd::{AddAuthorCommand, AddAuthorCommandRequest};
    use crate::registry::command::get_author_cmd::{GetAuthorCommand, GetAuthorCommandRequest};
    use crate::registry::factory;

    lazy_static! {
        static ref STATE: AsyncOnce<AppState> = AsyncOnce::new(async {
                AppState::build(Configuration::new("test"), RepositoryStore::Memory).await
            });
    }

    #[tokio::test]
    async fn test_should_run_get_author() {
        let state = STATE.get().await;
        let add_cmd = AddAuthorCommand::new(factory::create_registry_service(state));
        let get_cmd = GetAuthorCommand::new(factory::create_registry_service(state));

        let res = add_cmd.execute(AddAuthorCommandRequest::new(AuthorDto::new("Gene Wolfe")))
            .await.expect("should add author");
        let loaded = get_cmd.execute(GetAuthorCommandRequest::new(res.author.id.clone().unwrap_or_default()))
            .await.expect("should get author");
        assert_eq!(res.author, loaded.author);
    }

    #[tokio::test]
    async fn test_should_fail_get_missing_author() {
        let get_cmd = GetAuthorCommand::new(factory::create_registry_service(STATE.get().await));
        let res = get_cmd.execute(GetAuthorCommandRequest::new("missing".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
