use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use chrono::Utc;
use uuid::Uuid;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, matches_query};
use crate::core::repository::Repository;
use crate::utils::ddb::{is_conditional_put_failure, is_conditional_update_failure, opt_string, parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, string_date};

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }

    async fn scan_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let res = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(false)
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await.map_err(LibraryError::from)?;
            if let Some(items) = res.items() {
                records.extend(items.iter().map(map_to_book));
            }
            match res.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        sort_books(&mut records);
        Ok(records)
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        let mut book = entity.clone();
        book.assign_id(Uuid::new_v4().to_string().as_str());
        let val = serde_json::to_value(&book)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(book_id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map_err(|err| {
            if is_conditional_put_failure(&err) {
                LibraryError::duplicate_key(format!("book already exists {}", book.book_id).as_str())
            } else {
                LibraryError::from(err)
            }
        })?;
        Ok(book)
    }

    // author_id is never part of the update expression: a book keeps its author
    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        // year and language are reserved words, see https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/ReservedWords.html
        let res = self.client
            .update_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(entity.book_id.clone()))
            .update_expression("SET title = :title, isbn = :isbn, #year = :year, #language = :language, updated_at = :updated_at")
            .expression_attribute_names("#year", "year")
            .expression_attribute_names("#language", "language")
            .expression_attribute_values(":title", AttributeValue::S(entity.title.to_string()))
            .expression_attribute_values(":isbn", AttributeValue::N(entity.isbn.to_string()))
            .expression_attribute_values(":year", AttributeValue::N(entity.year.to_string()))
            .expression_attribute_values(":language", opt_string(entity.language.as_deref()))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(book_id)")
            .return_values(ReturnValue::AllNew)
            .send()
            .await.map_err(|err| {
            if is_conditional_update_failure(&err) {
                LibraryError::not_found(format!("book not found for {}", entity.book_id).as_str())
            } else {
                LibraryError::from(err)
            }
        })?;
        match res.attributes() {
            Some(map) if !map.is_empty() => Ok(map_to_book(map)),
            _ => Err(LibraryError::unexpected(
                format!("book {} updated without returning attributes", entity.book_id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "book_id = :book_id",
            )
            .expression_attribute_values(
                ":book_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items() {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many books for {}", id).as_str(), None, false));
                } else if let Some(map) = items.first() {
                    return Ok(map_to_book(map));
                }
            }
            Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client.delete_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await.map_err(LibraryError::from)?;
        match res.attributes() {
            Some(old) if !old.is_empty() => Ok(1),
            _ => Err(LibraryError::not_found(format!("book not found for {}", id).as_str())),
        }
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        self.scan_all().await
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn find_by_title(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        let books = self.scan_all().await?;
        Ok(books.into_iter().filter(|b| matches_query(b.title.as_str(), query)).collect())
    }

    async fn find_by_author_id(&self, author_id: &str) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let index_name: &str = self.index_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let res = self.client
                .query()
                .table_name(table_name)
                .index_name(index_name)
                .consistent_read(false)
                .key_condition_expression("author_id = :author_id")
                .expression_attribute_values(":author_id", AttributeValue::S(author_id.to_string()))
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await.map_err(LibraryError::from)?;
            if let Some(items) = res.items() {
                records.extend(items.iter().map(map_to_book));
            }
            match res.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        sort_books(&mut records);
        Ok(records)
    }
}

fn sort_books(records: &mut [BookEntity]) {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.book_id.cmp(&b.book_id)));
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        book_id: parse_string_attribute("book_id", map).unwrap_or(String::from("")),
        author_id: parse_string_attribute("author_id", map).unwrap_or(String::from("")),
        title: parse_string_attribute("title", map).unwrap_or(String::from("")),
        isbn: parse_number_attribute("isbn", map),
        year: parse_number_attribute("year", map),
        language: parse_string_attribute("language", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or(Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or(Utc::now().naive_utc()),
    }
}
