use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::authors::repository::AuthorRepository;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::validation::validate_book;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
    author_repository: Arc<dyn AuthorRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Arc<dyn BookRepository>, author_repository: Arc<dyn AuthorRepository>) -> Self {
        Self {
            book_repository,
            author_repository,
        }
    }

    fn validate(&self, book: &BookDto) -> LibraryResult<()> {
        validate_book(book).map_err(|err| {
            warn!("rejected book: {}", err);
            err
        })
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn add_book(&self, author_id: &str, book: &BookDto) -> LibraryResult<BookDto> {
        self.validate(book)?;
        // the author must exist before anything is written
        let author = self.author_repository.get(author_id).await?;
        let mut entity = BookEntity::from(book);
        entity.author_id = author.author_id;
        let saved = self.book_repository.create(&entity).await?;
        info!(book_id = saved.book_id.as_str(), author_id, "added book");
        Ok(BookDto::from(&saved))
    }

    #[tracing::instrument(skip(self))]
    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let _ = self.book_repository.delete(id).await?;
        info!(book_id = id, "removed book");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn update_book(&self, id: &str, book: &BookDto) -> LibraryResult<BookDto> {
        if book.id.as_deref() != Some(id) {
            warn!(book_id = id, "book id in body does not match path");
            return Err(LibraryError::validation(
                format!("book id {:?} does not match {}", book.id, id).as_str(), Some("id".to_string())));
        }
        self.validate(book)?;
        let saved = self.book_repository.update(&BookEntity::from(book)).await?;
        info!(book_id = id, "updated book");
        Ok(BookDto::from(&saved))
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_books(&self, query: Option<&str>) -> LibraryResult<Vec<BookDto>> {
        let res = match query {
            Some(q) => self.book_repository.find_by_title(q).await?,
            None => self.book_repository.list().await?,
        };
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_books_by_author(&self, author_id: &str) -> LibraryResult<Vec<BookDto>> {
        let _ = self.author_repository.get(author_id).await?;
        let res = self.book_repository.find_by_author_id(author_id).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: Some(other.book_id.to_string()),
            title: Some(other.title.to_string()),
            isbn: other.isbn,
            year: other.year,
            language: other.language.clone(),
            author_id: Some(other.author_id.to_string()),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        let mut entity = BookEntity::new(other.author_id.as_deref().unwrap_or_default(),
                                         other.title.as_deref().unwrap_or_default(),
                                         other.isbn, other.year, other.language.as_deref());
        if let Some(id) = &other.id {
            entity.book_id = id.to_string();
        }
        entity
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::authors::domain::model::AuthorEntity;
    use crate::authors::repository::memory_author_repository::MemoryAuthorRepository;
    use crate::books::dto::BookDto;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::factory;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::{Repository, RepositoryStore};

    async fn build_state_with_author(name: &str) -> (AppState, String) {
        let state = AppState::build(Configuration::new("test"), RepositoryStore::Memory).await;
        let author = state.author_repository.create(&AuthorEntity::new(name)).await.expect("should create author");
        (state, author.author_id)
    }

    #[tokio::test]
    async fn test_should_build_service_from_repositories_alone() {
        let author_repository = Arc::new(MemoryAuthorRepository::new());
        let author = author_repository.create(&AuthorEntity::new("Iain M. Banks")).await.expect("should create author");
        let catalog_svc = CatalogServiceImpl::new(Arc::new(MemoryBookRepository::new()), author_repository);

        let saved = catalog_svc.add_book(author.author_id.as_str(), &BookDto::new("Excession", 9780553575378, 1996, None))
            .await.expect("should add book");
        assert_eq!(vec![saved], catalog_svc.find_books_by_author(author.author_id.as_str()).await.expect("should list books"));
    }

    #[tokio::test]
    async fn test_should_add_book_to_author() {
        let (state, author_id) = build_state_with_author("William Gibson").await;
        let catalog_svc = factory::create_catalog_service(&state);

        let mut book = BookDto::new("X", 1234567890, 2000, Some("French"));
        book.author_id = Some("someone-else".to_string());
        let saved = catalog_svc.add_book(author_id.as_str(), &book).await.expect("should add book");
        assert!(saved.id.is_some());
        assert_eq!(Some(author_id.clone()), saved.author_id);
        assert_eq!(Some("French".to_string()), saved.language);

        let loaded = catalog_svc.find_book_by_id(saved.id.as_deref().unwrap_or_default())
            .await.expect("should return book");
        assert_eq!(saved, loaded);
    }

    #[tokio::test]
    async fn test_should_not_add_invalid_book() {
        let (state, author_id) = build_state_with_author("William Gibson").await;
        let catalog_svc = factory::create_catalog_service(&state);

        let res = catalog_svc.add_book(author_id.as_str(), &BookDto::new("X", 123, 2000, None)).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(catalog_svc.find_books(None).await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_not_add_book_to_missing_author() {
        let (state, _) = build_state_with_author("William Gibson").await;
        let catalog_svc = factory::create_catalog_service(&state);

        let res = catalog_svc.add_book("missing", &BookDto::new("X", 1234567890, 2000, None)).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert!(catalog_svc.find_books(None).await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let (state, author_id) = build_state_with_author("William Gibson").await;
        let catalog_svc = factory::create_catalog_service(&state);

        let mut book = catalog_svc.add_book(author_id.as_str(), &BookDto::new("Neuromancer", 9780441569595, 1984, None))
            .await.expect("should add book");
        let id = book.id.clone().unwrap_or_default();
        book.title = Some("Count Zero".to_string());
        book.isbn = 9780441117732;
        book.year = 1986;
        book.author_id = Some("someone-else".to_string());
        let updated = catalog_svc.update_book(id.as_str(), &book).await.expect("should update book");
        assert_eq!(Some("Count Zero".to_string()), updated.title);
        assert_eq!(9780441117732, updated.isbn);
        assert_eq!(Some(author_id), updated.author_id);
    }

    #[tokio::test]
    async fn test_should_reject_update_with_mismatched_id() {
        let (state, _) = build_state_with_author("William Gibson").await;
        let catalog_svc = factory::create_catalog_service(&state);

        let mut book = BookDto::new("X", 1234567890, 2000, None);
        book.id = Some("other".to_string());
        assert!(matches!(catalog_svc.update_book("missing", &book).await, Err(LibraryError::Validation { .. })));

        book.id = Some("missing".to_string());
        assert!(matches!(catalog_svc.update_book("missing", &book).await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_fields_on_update_with_matching_id() {
        let (state, author_id) = build_state_with_author("William Gibson").await;
        let catalog_svc = factory::create_catalog_service(&state);

        let mut book = catalog_svc.add_book(author_id.as_str(), &BookDto::new("Neuromancer", 9780441569595, 1984, None))
            .await.expect("should add book");
        let id = book.id.clone().unwrap_or_default();
        book.isbn = 0;
        match catalog_svc.update_book(id.as_str(), &book).await {
            Err(LibraryError::Validation { reason_code, .. }) => assert_eq!(Some("isbn".to_string()), reason_code),
            other => panic!("expected validation error, got {:?}", other),
        }
        let stored = catalog_svc.find_book_by_id(id.as_str()).await.expect("should find book");
        assert_eq!(9780441569595, stored.isbn);
    }

    #[tokio::test]
    async fn test_should_find_books() {
        let (state, author_id) = build_state_with_author("Isaac Asimov").await;
        let catalog_svc = factory::create_catalog_service(&state);
        for title in ["Foundation", "Foundation and Empire", "I, Robot"] {
            let _ = catalog_svc.add_book(author_id.as_str(), &BookDto::new(title, 1234567890, 1951, None))
                .await.expect("should add book");
        }

        assert_eq!(3, catalog_svc.find_books(None).await.expect("should list").len());
        assert_eq!(2, catalog_svc.find_books(Some("FOUNDATION")).await.expect("should search").len());
        assert_eq!(3, catalog_svc.find_books_by_author(author_id.as_str()).await.expect("should query").len());
        assert!(matches!(catalog_svc.find_books_by_author("missing").await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let (state, author_id) = build_state_with_author("Isaac Asimov").await;
        let catalog_svc = factory::create_catalog_service(&state);

        let book = catalog_svc.add_book(author_id.as_str(), &BookDto::new("The End of Eternity", 1234567890, 1955, None))
            .await.expect("should add book");
        let id = book.id.clone().unwrap_or_default();
        catalog_svc.remove_book(id.as_str()).await.expect("should remove book");

        assert!(matches!(catalog_svc.find_book_by_id(id.as_str()).await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog_svc.remove_book(id.as_str()).await, Err(LibraryError::NotFound { .. })));
    }
}
