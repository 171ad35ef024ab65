use async_trait::async_trait;
use chrono::Utc;

use crate::authors::domain::model::AuthorEntity;
use crate::authors::repository::AuthorRepository;
use crate::core::library::{LibraryResult, matches_query};
use crate::core::repository::Repository;
use crate::utils::memory::MemoryTable;

/// In-memory implementation of the author repository.
#[derive(Debug)]
pub struct MemoryAuthorRepository {
    authors: MemoryTable<AuthorEntity>,
}

impl Default for MemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            authors: MemoryTable::new("authors"),
        }
    }

    async fn select_sorted<P>(&self, predicate: P) -> Vec<AuthorEntity>
        where P: Fn(&AuthorEntity) -> bool + Send {
        let mut records = self.authors.select(predicate).await;
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.author_id.cmp(&b.author_id)));
        records
    }
}

#[async_trait]
impl Repository<AuthorEntity> for MemoryAuthorRepository {
    async fn create(&self, entity: &AuthorEntity) -> LibraryResult<AuthorEntity> {
        self.authors.insert(entity).await
    }

    async fn update(&self, entity: &AuthorEntity) -> LibraryResult<AuthorEntity> {
        let full_name = entity.full_name.to_string();
        self.authors.update_with(entity.author_id.as_str(), move |author| {
            author.full_name = full_name;
            author.updated_at = Utc::now().naive_utc();
        }).await
    }

    async fn get(&self, id: &str) -> LibraryResult<AuthorEntity> {
        self.authors.get(id).await
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.authors.remove(id).await
    }

    async fn list(&self) -> LibraryResult<Vec<AuthorEntity>> {
        Ok(self.select_sorted(|_| true).await)
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn find_by_name(&self, query: &str) -> LibraryResult<Vec<AuthorEntity>> {
        Ok(self.select_sorted(|a| matches_query(a.full_name.as_str(), query)).await)
    }
}

#[cfg(test)]
mod tests {
    use crate::authors::domain::model::AuthorEntity;
    use crate::authors::repository::AuthorRepository;
    use crate::authors::repository::memory_author_repository::MemoryAuthorRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_authors() {
        let authors_repo = MemoryAuthorRepository::new();
        let author = authors_repo.create(&AuthorEntity::new("Mary Shelley")).await.expect("should create author");
        assert!(!author.author_id.is_empty());

        let loaded = authors_repo.get(author.author_id.as_str()).await.expect("should return author");
        assert_eq!(author, loaded);
    }

    #[tokio::test]
    async fn test_should_update_only_existing_authors() {
        let authors_repo = MemoryAuthorRepository::new();
        let mut author = authors_repo.create(&AuthorEntity::new("Mary Shelly")).await.expect("should create author");
        author.full_name = "Mary Shelley".to_string();
        let updated = authors_repo.update(&author).await.expect("should update author");
        assert_eq!("Mary Shelley", updated.full_name.as_str());
        assert_eq!(author.created_at, updated.created_at);

        let mut missing = AuthorEntity::new("nobody");
        missing.author_id = "missing-author".to_string();
        assert!(matches!(authors_repo.update(&missing).await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_list_and_search_authors() {
        let authors_repo = MemoryAuthorRepository::new();
        let _ = authors_repo.create(&AuthorEntity::new("Isaac Asimov")).await.expect("should create author");
        let _ = authors_repo.create(&AuthorEntity::new("Arthur C. Clarke")).await.expect("should create author");

        assert_eq!(2, authors_repo.list().await.expect("should list").len());
        let res = authors_repo.find_by_name("ASIMOV").await.expect("should search");
        assert_eq!(1, res.len());
        assert_eq!("Isaac Asimov", res[0].full_name.as_str());
        assert!(authors_repo.find_by_name("tolkien").await.expect("should search").is_empty());
    }

    #[tokio::test]
    async fn test_should_delete_authors() {
        let authors_repo = MemoryAuthorRepository::new();
        let author = authors_repo.create(&AuthorEntity::new("H. G. Wells")).await.expect("should create author");
        assert_eq!(1, authors_repo.delete(author.author_id.as_str()).await.expect("should delete author"));
        assert!(matches!(authors_repo.get(author.author_id.as_str()).await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(authors_repo.delete(author.author_id.as_str()).await, Err(LibraryError::NotFound { .. })));
    }
}
