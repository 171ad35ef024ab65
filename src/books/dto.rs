use serde::{Deserialize, Serialize};

// BookDto is the external representation of a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDto {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "isbn::deserialize")]
    pub isbn: i64,
    #[serde(default)]
    pub year: i64,
    pub language: Option<String>,
    pub author_id: Option<String>,
}

impl BookDto {
    pub fn new(title: &str, isbn: i64, year: i64, language: Option<&str>) -> BookDto {
        BookDto {
            id: None,
            title: Some(title.to_string()),
            isbn,
            year,
            language: language.map(str::to_string),
            author_id: None,
        }
    }
}

// isbn is accepted as a JSON number or as a string of digits
mod isbn {
    use serde::{Deserialize, Deserializer};
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIsbn {
        Number(i64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match RawIsbn::deserialize(deserializer)? {
            RawIsbn::Number(n) => Ok(n),
            RawIsbn::Text(s) => s.trim().parse::<i64>()
                .map_err(|err| D::Error::custom(format!("isbn {:?} is not numeric: {}", s, err))),
        }
    }
}
