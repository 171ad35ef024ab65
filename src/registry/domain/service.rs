use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::authors::domain::model::AuthorEntity;
use crate::authors::dto::AuthorDto;
use crate::authors::repository::AuthorRepository;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::registry::domain::RegistryService;

pub(crate) struct RegistryServiceImpl {
    author_repository: Arc<dyn AuthorRepository>,
    book_repository: Arc<dyn BookRepository>,
}

impl RegistryServiceImpl {
    pub(crate) fn new(author_repository: Arc<dyn AuthorRepository>, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            author_repository,
            book_repository,
        }
    }
}

fn validate_author(author: &AuthorDto) -> LibraryResult<()> {
    if author.full_name.trim().is_empty() {
        return Err(LibraryError::validation("fullName must not be blank", Some("fullName".to_string())));
    }
    Ok(())
}

#[async_trait]
impl RegistryService for RegistryServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn add_author(&self, author: &AuthorDto) -> LibraryResult<AuthorDto> {
        if let Err(err) = validate_author(author) {
            warn!("rejected new author: {}", err);
            return Err(err);
        }
        let saved = self.author_repository.create(&AuthorEntity::from(author)).await?;
        info!(author_id = saved.author_id.as_str(), "added author");
        Ok(AuthorDto::from(&saved))
    }

    #[tracing::instrument(skip(self))]
    async fn remove_author(&self, id: &str) -> LibraryResult<()> {
        let books = self.book_repository.find_by_author_id(id).await?;
        if !books.is_empty() {
            warn!(author_id = id, books = books.len(), "author still owns books");
            return Err(LibraryError::conflict(
                format!("author {} still owns {} book(s)", id, books.len()).as_str(),
                Some("books".to_string())));
        }
        let _ = self.author_repository.delete(id).await?;
        info!(author_id = id, "removed author");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn update_author(&self, id: &str, author: &AuthorDto) -> LibraryResult<AuthorDto> {
        if author.id.as_deref() != Some(id) {
            warn!(author_id = id, "author id in body does not match path");
            return Err(LibraryError::validation(
                format!("author id {:?} does not match {}", author.id, id).as_str(), Some("id".to_string())));
        }
        validate_author(author)?;
        let saved = self.author_repository.update(&AuthorEntity::from(author)).await?;
        info!(author_id = id, "updated author");
        Ok(AuthorDto::from(&saved))
    }

    async fn find_author_by_id(&self, id: &str) -> LibraryResult<AuthorDto> {
        self.author_repository.get(id).await.map(|a| AuthorDto::from(&a))
    }

    async fn find_authors(&self, query: Option<&str>) -> LibraryResult<Vec<AuthorDto>> {
        let res = match query {
            Some(q) => self.author_repository.find_by_name(q).await?,
            None => self.author_repository.list().await?,
        };
        Ok(res.iter().map(AuthorDto::from).collect())
    }
}

impl From<&AuthorEntity> for AuthorDto {
    fn from(other: &AuthorEntity) -> Self {
        Self {
            id: Some(other.author_id.to_string()),
            full_name: other.full_name.to_string(),
        }
    }
}

impl From<&AuthorDto> for AuthorEntity {
    fn from(other: &AuthorDto) -> Self {
        let mut entity = AuthorEntity::new(other.full_name.as_str());
        if let Some(id) = &other.id {
            entity.author_id = id.to_string();
        }
        entity
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::authors::dto::AuthorDto;
    use crate::authors::repository::memory_author_repository::MemoryAuthorRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::books::domain::model::BookEntity;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;
    use crate::registry::domain::RegistryService;
    use crate::registry::domain::service::RegistryServiceImpl;
    use crate::registry::factory;

    async fn build_state() -> AppState {
        AppState::build(Configuration::new("test"), RepositoryStore::Memory).await
    }

    #[tokio::test]
    async fn test_should_add_author() {
        let state = build_state().await;
        let registry_svc = factory::create_registry_service(&state);

        let author = registry_svc.add_author(&AuthorDto::new("Octavia E. Butler")).await.expect("should add author");
        assert!(author.id.is_some());

        let loaded = registry_svc.find_author_by_id(author.id.as_deref().unwrap_or_default())
            .await.expect("should return author");
        assert_eq!(author, loaded);
    }

    #[tokio::test]
    async fn test_should_build_service_from_repositories_alone() {
        let registry_svc = RegistryServiceImpl::new(Arc::new(MemoryAuthorRepository::new()),
                                                    Arc::new(MemoryBookRepository::new()));
        let author = registry_svc.add_author(&AuthorDto::new("Kim Stanley Robinson")).await.expect("should add author");
        assert_eq!(vec![author], registry_svc.find_authors(None).await.expect("should list authors"));
    }

    #[tokio::test]
    async fn test_should_ignore_id_on_add() {
        let state = build_state().await;
        let registry_svc = factory::create_registry_service(&state);

        let author = registry_svc.add_author(&AuthorDto::with_id("chosen-id", "Stanislaw Lem"))
            .await.expect("should add author");
        assert_ne!(Some("chosen-id".to_string()), author.id);
    }

    #[tokio::test]
    async fn test_should_reject_blank_author() {
        let state = build_state().await;
        let registry_svc = factory::create_registry_service(&state);

        let res = registry_svc.add_author(&AuthorDto::new("   ")).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(registry_svc.find_authors(None).await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_update_author() {
        let state = build_state().await;
        let registry_svc = factory::create_registry_service(&state);

        let mut author = registry_svc.add_author(&AuthorDto::new("Philip K Dick")).await.expect("should add author");
        let id = author.id.clone().unwrap_or_default();
        author.full_name = "Philip K. Dick".to_string();
        let updated = registry_svc.update_author(id.as_str(), &author).await.expect("should update author");
        assert_eq!("Philip K. Dick", updated.full_name.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_mismatched_id_before_lookup() {
        let state = build_state().await;
        let registry_svc = factory::create_registry_service(&state);

        let res = registry_svc.update_author("missing", &AuthorDto::with_id("other", "Nobody")).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));

        let res = registry_svc.update_author("missing", &AuthorDto::new("Nobody")).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));

        let res = registry_svc.update_author("missing", &AuthorDto::with_id("missing", "Nobody")).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_blank_name_on_update_with_matching_id() {
        let state = build_state().await;
        let registry_svc = factory::create_registry_service(&state);

        let author = registry_svc.add_author(&AuthorDto::new("Stanislaw Lem")).await.expect("should add author");
        let id = author.id.clone().unwrap_or_default();
        let res = registry_svc.update_author(id.as_str(), &AuthorDto::with_id(id.as_str(), "  ")).await;
        match res {
            Err(LibraryError::Validation { reason_code, .. }) => assert_eq!(Some("fullName".to_string()), reason_code),
            other => panic!("expected validation error, got {:?}", other),
        }
        let stored = registry_svc.find_author_by_id(id.as_str()).await.expect("should find author");
        assert_eq!("Stanislaw Lem", stored.full_name.as_str());
    }

    #[tokio::test]
    async fn test_should_search_authors() {
        let state = build_state().await;
        let registry_svc = factory::create_registry_service(&state);

        let _ = registry_svc.add_author(&AuthorDto::new("Ray Bradbury")).await.expect("should add author");
        let _ = registry_svc.add_author(&AuthorDto::new("Frank Herbert")).await.expect("should add author");

        assert_eq!(2, registry_svc.find_authors(None).await.expect("should list").len());
        let res = registry_svc.find_authors(Some("bRaD")).await.expect("should search");
        assert_eq!(1, res.len());
        assert_eq!("Ray Bradbury", res[0].full_name.as_str());
    }

    #[tokio::test]
    async fn test_should_not_remove_author_with_books() {
        let state = build_state().await;
        let registry_svc = factory::create_registry_service(&state);

        let author = registry_svc.add_author(&AuthorDto::new("Frank Herbert")).await.expect("should add author");
        let id = author.id.clone().unwrap_or_default();
        let _ = state.book_repository.create(&BookEntity::new(id.as_str(), "Dune", 9780441013593, 1965, None))
            .await.expect("should create book");

        let res = registry_svc.remove_author(id.as_str()).await;
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert!(registry_svc.find_author_by_id(id.as_str()).await.is_ok());
    }

    #[tokio::test]
    async fn test_should_remove_author() {
        let state = build_state().await;
        let registry_svc = factory::create_registry_service(&state);

        let author = registry_svc.add_author(&AuthorDto::new("Mervyn Peake")).await.expect("should add author");
        let id = author.id.clone().unwrap_or_default();
        registry_svc.remove_author(id.as_str()).await.expect("should remove author");

        assert!(matches!(registry_svc.find_author_by_id(id.as_str()).await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(registry_svc.remove_author(id.as_str()).await, Err(LibraryError::NotFound { .. })));
    }
}
