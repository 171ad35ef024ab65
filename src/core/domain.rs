use std::env;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    // the store assigns identifiers on creation
    fn assign_id(&mut self, id: &str);
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub authors_table: String,
    pub books_table: String,
    pub local_endpoint: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            authors_table: "authors".to_string(),
            books_table: "books".to_string(),
            local_endpoint: "http://localhost:8000".to_string(),
        }
    }

    pub fn from_env(branch_id: &str) -> Self {
        let mut config = Configuration::new(branch_id);
        if let Ok(table) = env::var("LIBRARY_AUTHORS_TABLE") {
            config.authors_table = table;
        }
        if let Ok(table) = env::var("LIBRARY_BOOKS_TABLE") {
            config.books_table = table;
        }
        if let Ok(endpoint) = env::var("LIBRARY_LOCAL_ENDPOINT") {
            config.local_endpoint = endpoint;
        }
        config
    }

    pub fn books_index(&self) -> String {
        format!("{}_ndx", self.books_table)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!("authors", config.authors_table.as_str());
        assert_eq!("books", config.books_table.as_str());
        assert_eq!("books_ndx", config.books_index().as_str());
    }
}
