use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use chrono::Utc;
use uuid::Uuid;

use crate::authors::domain::model::AuthorEntity;
use crate::authors::repository::AuthorRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, matches_query};
use crate::core::repository::Repository;
use crate::utils::ddb::{is_conditional_put_failure, is_conditional_update_failure, parse_date_attribute, parse_item, parse_string_attribute, string_date};

#[derive(Debug)]
pub struct DDBAuthorRepository {
    client: Client,
    table_name: String,
}

impl DDBAuthorRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    async fn scan_all(&self) -> LibraryResult<Vec<AuthorEntity>> {
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
                records.extend(items.iter().map(map_to_author));
            }
            match res.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        records.sort_by(|a: &AuthorEntity, b: &AuthorEntity| a.created_at.cmp(&b.created_at).then(a.author_id.cmp(&b.author_id)));
        Ok(records)
    }
}

#[async_trait]
impl Repository<AuthorEntity> for DDBAuthorRepository {
    async fn create(&self, entity: &AuthorEntity) -> LibraryResult<AuthorEntity> {
        let table_name: &str = self.table_name.as_ref();
        let mut author = entity.clone();
        author.assign_id(Uuid::new_v4().to_string().as_str());
        let val = serde_json::to_value(&author)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(author_id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map_err(|err| {
            if is_conditional_put_failure(&err) {
                LibraryError::duplicate_key(format!("author already exists {}", author.author_id).as_str())
            } else {
                LibraryError::from(err)
            }
        })?;
        Ok(author)
    }

    async fn update(&self, entity: &AuthorEntity) -> LibraryResult<AuthorEntity> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        let res = self.client
            .update_item()
            .table_name(table_name)
            .key("author_id", AttributeValue::S(entity.author_id.clone()))
            .update_expression("SET full_name = :full_name, updated_at = :updated_at")
            .expression_attribute_values(":full_name", AttributeValue::S(entity.full_name.to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(author_id)")
            .return_values(ReturnValue::AllNew)
            .send()
            .await.map_err(|err| {
            if is_conditional_update_failure(&err) {
                LibraryError::not_found(format!("author not found for {}", entity.author_id).as_str())
            } else {
                LibraryError::from(err)
            }
        })?;
        match res.attributes() {
            Some(map) if !map.is_empty() => Ok(map_to_author(map)),
            _ => Err(LibraryError::unexpected(
                format!("author {} updated without returning attributes", entity.author_id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<AuthorEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "author_id = :author_id",
            )
            .expression_attribute_values(
                ":author_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items() {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many authors for {}", id).as_str(), None, false));
                } else if let Some(map) = items.first() {
                    return Ok(map_to_author(map));
                }
            }
            Err(LibraryError::not_found(format!("author not found for {}", id).as_str()))
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client.delete_item()
            .table_name(table_name)
            .key("author_id", AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await.map_err(LibraryError::from)?;
        match res.attributes() {
            Some(old) if !old.is_empty() => Ok(1),
            _ => Err(LibraryError::not_found(format!("author not found for {}", id).as_str())),
        }
    }

    async fn list(&self) -> LibraryResult<Vec<AuthorEntity>> {
        self.scan_all().await
    }
}

#[async_trait]
impl AuthorRepository for DDBAuthorRepository {
    async fn find_by_name(&self, query: &str) -> LibraryResult<Vec<AuthorEntity>> {
        let authors = self.scan_all().await?;
        Ok(authors.into_iter().filter(|a| matches_query(a.full_name.as_str(), query)).collect())
    }
}

fn map_to_author(map: &HashMap<String, AttributeValue>) -> AuthorEntity {
    AuthorEntity {
        author_id: parse_string_attribute("author_id", map).unwrap_or(String::from("")),
        full_name: parse_string_attribute("full_name", map).unwrap_or(String::from("")),
        created_at: parse_date_attribute("created_at", map).unwrap_or(Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or(Utc::now().naive_utc()),
    }
}
