use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is the persisted form of a book, owned by exactly one author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: String,
    pub author_id: String,
    pub title: String,
    pub isbn: i64,
    pub year: i64,
    pub language: Option<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(author_id: &str, title: &str, isbn: i64, year: i64, language: Option<&str>) -> Self {
        Self {
            book_id: "".to_string(), // assigned by the repository
            author_id: author_id.to_string(),
            title: title.to_string(),
            isbn,
            year,
            language: language.map(str::to_string),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn assign_id(&mut self, id: &str) {
        self.book_id = id.to_string();
    }
}
