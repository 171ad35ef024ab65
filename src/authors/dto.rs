use serde::{Deserialize, Serialize};

// AuthorDto is the external representation of an author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthorDto {
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: String,
}

impl AuthorDto {
    pub fn new(full_name: &str) -> AuthorDto {
        AuthorDto {
            id: None,
            full_name: full_name.to_string(),
        }
    }

    pub fn with_id(id: &str, full_name: &str) -> AuthorDto {
        AuthorDto {
            id: Some(id.to_string()),
            full_name: full_name.to_string(),
        }
    }
}
