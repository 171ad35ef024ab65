use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// AuthorEntity is the persisted form of an author; the books written by the
// author reference it through their author_id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AuthorEntity {
    pub author_id: String,
    pub full_name: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl AuthorEntity {
    pub fn new(full_name: &str) -> Self {
        Self {
            author_id: "".to_string(), // assigned by the repository
            full_name: full_name.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for AuthorEntity {
    fn id(&self) -> String {
        self.author_id.to_string()
    }

    fn assign_id(&mut self, id: &str) {
        self.author_id = id.to_string();
    }
}
