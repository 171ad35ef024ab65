use async_trait::async_trait;
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryResult, matches_query};
use crate::core::repository::Repository;
use crate::utils::memory::MemoryTable;

#[derive(Debug)]
pub struct MemoryBookRepository {
    books: MemoryTable<BookEntity>,
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: MemoryTable::new("books"),
        }
    }

    async fn select_sorted<P>(&self, predicate: P) -> Vec<BookEntity>
        where P: Fn(&BookEntity) -> bool + Send {
        let mut records = self.books.select(predicate).await;
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.book_id.cmp(&b.book_id)));
        records
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        self.books.insert(entity).await
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let changes = entity.clone();
        self.books.update_with(entity.book_id.as_str(), move |book| {
            book.title = changes.title;
            book.isbn = changes.isbn;
            book.year = changes.year;
            book.language = changes.language;
            book.updated_at = Utc::now().naive_utc();
        }).await
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.get(id).await
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.books.remove(id).await
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.select_sorted(|_| true).await)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_title(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.select_sorted(|b| matches_query(b.title.as_str(), query)).await)
    }

    async fn find_by_author_id(&self, author_id: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.select_sorted(|b| b.author_id == author_id).await)
    }
}
